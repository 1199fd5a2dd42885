//! Completion-callback delivery of client results.
//!
//! Plain `#[test]` functions: `CallbackRuntime` owns its own Tokio runtime and
//! must not be dropped inside another one.

use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

use dragonball_lib::callback::{CallbackClient, CallbackRuntime, FnCallback, ResultCallback};
use dragonball_lib::test_utils::{fixtures, MockTransport, TestFixtures};
use dragonball_lib::{
    ClientConfig, DragonBallError, Hero, NetworkClient, SessionToken, Transformation,
};

const WAIT: Duration = Duration::from_secs(5);

/// Records every invocation so tests can check it happened exactly once.
struct Expectation<T> {
    values: Mutex<Vec<T>>,
    errors: Mutex<Vec<DragonBallError>>,
    fulfilled: mpsc::Sender<()>,
}

impl<T> Expectation<T> {
    fn new() -> (Arc<Self>, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel();
        let expectation = Arc::new(Self {
            values: Mutex::new(Vec::new()),
            errors: Mutex::new(Vec::new()),
            fulfilled: tx,
        });
        (expectation, rx)
    }

    fn invocations(&self) -> usize {
        self.values.lock().unwrap().len() + self.errors.lock().unwrap().len()
    }
}

impl<T: Send> ResultCallback<T> for Expectation<T> {
    fn on_success(&self, value: T) {
        self.values.lock().unwrap().push(value);
        let _ = self.fulfilled.send(());
    }

    fn on_error(&self, error: DragonBallError) {
        self.errors.lock().unwrap().push(error);
        let _ = self.fulfilled.send(());
    }
}

fn callback_client(transport: Arc<MockTransport>) -> CallbackClient<Arc<MockTransport>> {
    let runtime = Arc::new(CallbackRuntime::with_threads(2).unwrap());
    let client =
        NetworkClient::new(ClientConfig::new("https://dragonball.example.com"), transport).unwrap();
    CallbackClient::new(client, runtime)
}

/// Waits for the first invocation, then gives a late duplicate a chance to show up.
fn wait_once(rx: &mpsc::Receiver<()>) {
    rx.recv_timeout(WAIT).expect("callback was never invoked");
    assert!(
        rx.recv_timeout(Duration::from_millis(100)).is_err(),
        "callback invoked more than once"
    );
}

#[test]
fn test_ten_heroes_fulfil_once() {
    let transport = Arc::new(MockTransport::new());
    transport.set_handler(|_| Ok(fixtures::json_response(&fixtures::heroes(10))));
    let client = callback_client(transport);
    let (expectation, rx) = Expectation::<Vec<Hero>>::new();

    client.heroes_list(&SessionToken::new(TestFixtures::TOKEN), expectation.clone());
    wait_once(&rx);

    assert_eq!(expectation.invocations(), 1);
    assert!(expectation.errors.lock().unwrap().is_empty());
    let values = expectation.values.lock().unwrap();
    assert_eq!(values[0].len(), 10);
    assert!(values[0].iter().all(|hero| hero.name == "Goku"));
}

#[test]
fn test_transport_error_reaches_error_slot_only() {
    let transport = Arc::new(MockTransport::new());
    transport.set_error(DragonBallError::Transport("offline".into()));
    let client = callback_client(transport);
    let (expectation, rx) = Expectation::<Vec<Hero>>::new();

    client.heroes_list(&SessionToken::new("t"), expectation.clone());
    wait_once(&rx);

    assert!(expectation.values.lock().unwrap().is_empty());
    let errors = expectation.errors.lock().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].is_transport());
}

#[test]
fn test_login_completion_closure() {
    let transport = Arc::new(MockTransport::new());
    transport.set_handler(|_| Ok(fixtures::text_response(TestFixtures::TOKEN)));
    let client = callback_client(transport.clone());
    let (tx, rx) = mpsc::channel();

    client.login(
        TestFixtures::USER,
        TestFixtures::PASSWORD,
        Arc::new(FnCallback::from_completion(
            move |token: Option<SessionToken>, error: Option<DragonBallError>| {
                tx.send((token, error.is_some())).unwrap();
            },
        )),
    );

    let (token, has_error) = rx.recv_timeout(WAIT).unwrap();
    assert_eq!(token, Some(SessionToken::new(TestFixtures::TOKEN)));
    assert!(!has_error);
    assert_eq!(transport.request_count(), 1);
}

#[test]
fn test_transformations_status_error() {
    let transport = Arc::new(MockTransport::new());
    transport.set_handler(|_| Ok(fixtures::status_response(403)));
    let client = callback_client(transport);
    let (expectation, rx) = Expectation::<Vec<Transformation>>::new();

    client.transformation_heroes_list(
        &SessionToken::new("t"),
        TestFixtures::PARENT_HERO_ID,
        expectation.clone(),
    );
    wait_once(&rx);

    assert!(expectation.values.lock().unwrap().is_empty());
    assert_eq!(expectation.errors.lock().unwrap()[0].status(), Some(403));
}
