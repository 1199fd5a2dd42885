//! Callback-style delivery of client results.
//!
//! Callers that cannot await futures (mobile shells, FFI, UI toolkits) hand
//! over a [`ResultCallback`] instead. Every spawned operation invokes its
//! callback exactly once, with either a value or an error, never both.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use dragonball_lib::callback::{CallbackClient, CallbackRuntime, FnCallback};
//! use dragonball_lib::{ClientConfig, NetworkClient};
//!
//! let runtime = Arc::new(CallbackRuntime::new()?);
//! let client = CallbackClient::new(NetworkClient::from_config(ClientConfig::default())?, runtime);
//!
//! client.login("goku@capsule.corp", "kamehameha", Arc::new(FnCallback::from_completion(
//!     |token, error| match (token, error) {
//!         (Some(token), _) => println!("logged in: {token:?}"),
//!         (_, Some(error)) => eprintln!("login failed: {error}"),
//!         _ => unreachable!(),
//!     },
//! )));
//! ```

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::oneshot;

use crate::client::NetworkClient;
use crate::models::{Credentials, Hero, SessionToken, Transformation};
use crate::transport::HttpTransport;
use crate::{DragonBallError, Result};

/// Receiver of an asynchronous result.
pub trait ResultCallback<T>: Send + Sync {
    /// Called with the value of a successful operation.
    fn on_success(&self, value: T);

    /// Called with the error of a failed operation.
    fn on_error(&self, error: DragonBallError);
}

/// Single-shot delivery of a result to a callback.
///
/// The first call to [`complete`](Self::complete) reaches the callback.
/// Later calls are dropped. A completion dropped before any call delivers
/// a [`DragonBallError::Internal`] error, so the callback always fires.
pub struct Completion<T> {
    callback: Arc<dyn ResultCallback<T>>,
    completed: AtomicBool,
}

impl<T> Completion<T> {
    /// Wrap a callback.
    pub fn new(callback: Arc<dyn ResultCallback<T>>) -> Self {
        Self {
            callback,
            completed: AtomicBool::new(false),
        }
    }

    /// Deliver `result`. Returns `false` if a result was already delivered.
    pub fn complete(&self, result: Result<T>) -> bool {
        if self.completed.swap(true, Ordering::AcqRel) {
            #[cfg(feature = "tracing")]
            tracing::warn!("completion already delivered, dropping result");
            return false;
        }

        match result {
            Ok(value) => self.callback.on_success(value),
            Err(error) => self.callback.on_error(error),
        }
        true
    }

    /// Whether a result has been delivered.
    pub fn is_completed(&self) -> bool {
        self.completed.load(Ordering::Acquire)
    }
}

impl<T> Drop for Completion<T> {
    fn drop(&mut self) {
        if !self.is_completed() {
            #[cfg(feature = "tracing")]
            tracing::debug!("operation dropped before completing");
            self.complete(Err(DragonBallError::Internal(
                "operation dropped".to_string(),
            )));
        }
    }
}

/// Handle to a spawned operation.
///
/// Dropping the handle does not cancel the operation.
pub struct CallbackHandle {
    cancel_tx: Option<oneshot::Sender<()>>,
}

impl CallbackHandle {
    fn new(cancel_tx: oneshot::Sender<()>) -> Self {
        Self {
            cancel_tx: Some(cancel_tx),
        }
    }

    /// Cancel the operation.
    ///
    /// If the operation had not finished yet, its callback receives an
    /// [`DragonBallError::Internal`] error instead of the result.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            let _ = tx.send(());
        }
    }

    /// Check if [`cancel`](Self::cancel) was called.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_tx.is_none()
    }
}

/// Tokio runtime that drives callback-style operations.
///
/// Must not be created or dropped from inside another Tokio runtime.
pub struct CallbackRuntime {
    runtime: tokio::runtime::Runtime,
}

impl CallbackRuntime {
    /// Create a multi-threaded runtime with default settings.
    pub fn new() -> Result<Self> {
        tokio::runtime::Runtime::new()
            .map(|runtime| Self { runtime })
            .map_err(|e| DragonBallError::Internal(format!("failed to create runtime: {e}")))
    }

    /// Create a runtime with a fixed number of worker threads.
    pub fn with_threads(num_threads: usize) -> Result<Self> {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(num_threads)
            .enable_all()
            .build()
            .map(|runtime| Self { runtime })
            .map_err(|e| DragonBallError::Internal(format!("failed to create runtime: {e}")))
    }

    /// Run a future to completion on the current thread.
    ///
    /// # Panics
    ///
    /// Panics if called from within a Tokio runtime context.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Run `future` in the background and hand its result to `callback`.
    ///
    /// The callback is invoked exactly once: with the result, with a
    /// cancellation error if the returned handle is cancelled first, or with
    /// an `operation dropped` error if the runtime shuts down first.
    pub fn spawn_with_callback<F, T>(
        &self,
        future: F,
        callback: Arc<dyn ResultCallback<T>>,
    ) -> CallbackHandle
    where
        F: Future<Output = Result<T>> + Send + 'static,
        T: Send + 'static,
    {
        let (cancel_tx, cancel_rx) = oneshot::channel();
        let completion = Completion::new(callback);

        self.runtime.spawn(async move {
            tokio::select! {
                Ok(()) = cancel_rx => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("operation cancelled");
                    completion.complete(Err(DragonBallError::Internal(
                        "operation cancelled".to_string(),
                    )));
                }
                result = future => {
                    completion.complete(result);
                }
            }
        });

        CallbackHandle::new(cancel_tx)
    }
}

/// [`ResultCallback`] built from closures.
pub struct FnCallback<T> {
    success_fn: Arc<dyn Fn(T) + Send + Sync>,
    error_fn: Arc<dyn Fn(DragonBallError) + Send + Sync>,
}

impl<T> Clone for FnCallback<T> {
    fn clone(&self) -> Self {
        Self {
            success_fn: Arc::clone(&self.success_fn),
            error_fn: Arc::clone(&self.error_fn),
        }
    }
}

impl<T: 'static> FnCallback<T> {
    /// Create a callback from a success and an error closure.
    pub fn new<S, E>(success_fn: S, error_fn: E) -> Self
    where
        S: Fn(T) + Send + Sync + 'static,
        E: Fn(DragonBallError) + Send + Sync + 'static,
    {
        Self {
            success_fn: Arc::new(success_fn),
            error_fn: Arc::new(error_fn),
        }
    }

    /// Create a callback from a single `(value, error)` completion closure.
    ///
    /// Exactly one of the two arguments is `Some` on every call.
    pub fn from_completion<F>(completion: F) -> Self
    where
        F: Fn(Option<T>, Option<DragonBallError>) + Send + Sync + 'static,
    {
        let completion = Arc::new(completion);
        let on_error = Arc::clone(&completion);
        Self::new(
            move |value| completion(Some(value), None),
            move |error| on_error(None, Some(error)),
        )
    }
}

impl<T> ResultCallback<T> for FnCallback<T> {
    fn on_success(&self, value: T) {
        (self.success_fn)(value)
    }

    fn on_error(&self, error: DragonBallError) {
        (self.error_fn)(error)
    }
}

/// [`NetworkClient`] operations in completion-callback form.
pub struct CallbackClient<T> {
    client: Arc<NetworkClient<T>>,
    runtime: Arc<CallbackRuntime>,
}

impl<T> Clone for CallbackClient<T> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            runtime: Arc::clone(&self.runtime),
        }
    }
}

impl<T: HttpTransport + 'static> CallbackClient<T> {
    /// Wrap a client; its operations run on `runtime`.
    pub fn new(client: NetworkClient<T>, runtime: Arc<CallbackRuntime>) -> Self {
        Self {
            client: Arc::new(client),
            runtime,
        }
    }

    /// The wrapped async client.
    pub fn client(&self) -> &NetworkClient<T> {
        &self.client
    }

    /// Callback form of [`NetworkClient::login`].
    pub fn login(
        &self,
        user: &str,
        password: &str,
        callback: Arc<dyn ResultCallback<SessionToken>>,
    ) -> CallbackHandle {
        let client = Arc::clone(&self.client);
        let credentials = Credentials::new(user, password);
        self.runtime.spawn_with_callback(
            async move { client.login_with(&credentials).await },
            callback,
        )
    }

    /// Callback form of [`NetworkClient::heroes_list`].
    pub fn heroes_list(
        &self,
        token: &SessionToken,
        callback: Arc<dyn ResultCallback<Vec<Hero>>>,
    ) -> CallbackHandle {
        let client = Arc::clone(&self.client);
        let token = token.clone();
        self.runtime
            .spawn_with_callback(async move { client.heroes_list(&token).await }, callback)
    }

    /// Callback form of [`NetworkClient::transformation_heroes_list`].
    pub fn transformation_heroes_list(
        &self,
        token: &SessionToken,
        parent_hero_id: &str,
        callback: Arc<dyn ResultCallback<Vec<Transformation>>>,
    ) -> CallbackHandle {
        let client = Arc::clone(&self.client);
        let token = token.clone();
        let parent_hero_id = parent_hero_id.to_string();
        self.runtime.spawn_with_callback(
            async move {
                client
                    .transformation_heroes_list(&token, &parent_hero_id)
                    .await
            },
            callback,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct Recorder {
        values: Mutex<Vec<u32>>,
        errors: Mutex<Vec<String>>,
    }

    impl ResultCallback<u32> for Recorder {
        fn on_success(&self, value: u32) {
            self.values.lock().unwrap().push(value);
        }

        fn on_error(&self, error: DragonBallError) {
            self.errors.lock().unwrap().push(error.to_string());
        }
    }

    #[test]
    fn test_completion_delivers_once() {
        let recorder = Arc::new(Recorder::default());
        let completion = Completion::<u32>::new(recorder.clone());

        assert!(!completion.is_completed());
        assert!(completion.complete(Ok(1)));
        assert!(!completion.complete(Ok(2)));
        assert!(!completion.complete(Err(DragonBallError::Internal("late".into()))));

        assert!(completion.is_completed());
        assert_eq!(*recorder.values.lock().unwrap(), vec![1]);
        assert!(recorder.errors.lock().unwrap().is_empty());
    }

    #[test]
    fn test_dropped_completion_reports_error_once() {
        let recorder = Arc::new(Recorder::default());
        drop(Completion::<u32>::new(recorder.clone()));

        assert!(recorder.values.lock().unwrap().is_empty());
        assert_eq!(
            *recorder.errors.lock().unwrap(),
            vec!["internal error: operation dropped".to_string()]
        );
    }

    #[test]
    fn test_completed_completion_drops_silently() {
        let recorder = Arc::new(Recorder::default());
        let completion = Completion::<u32>::new(recorder.clone());
        completion.complete(Ok(3));
        drop(completion);

        assert_eq!(*recorder.values.lock().unwrap(), vec![3]);
        assert!(recorder.errors.lock().unwrap().is_empty());
    }

    #[test]
    fn test_runtime_shutdown_reports_error() {
        let runtime = CallbackRuntime::with_threads(1).unwrap();
        let recorder = Arc::new(Recorder::default());

        let _handle =
            runtime.spawn_with_callback(std::future::pending::<Result<u32>>(), recorder.clone());
        drop(runtime);

        assert!(recorder.values.lock().unwrap().is_empty());
        assert_eq!(
            *recorder.errors.lock().unwrap(),
            vec!["internal error: operation dropped".to_string()]
        );
    }

    #[test]
    fn test_from_completion_sets_exactly_one_side() {
        let (tx, rx) = mpsc::channel();
        let callback = FnCallback::from_completion(move |value: Option<u32>, error| {
            tx.send((value, error.map(|e: DragonBallError| e.to_string())))
                .unwrap();
        });

        callback.on_success(7);
        callback.on_error(DragonBallError::Transport("offline".into()));

        assert_eq!(rx.recv().unwrap(), (Some(7), None));
        assert_eq!(
            rx.recv().unwrap(),
            (None, Some("transport error: offline".to_string()))
        );
    }

    #[test]
    fn test_spawn_with_callback_delivers_result() {
        let runtime = CallbackRuntime::with_threads(1).unwrap();
        let (tx, rx) = mpsc::channel();
        let callback = FnCallback::new(
            {
                let tx = tx.clone();
                move |value: u32| tx.send(Ok(value)).unwrap()
            },
            move |error| tx.send(Err(error.to_string())).unwrap(),
        );

        let _handle =
            runtime.spawn_with_callback(async { Ok::<u32, DragonBallError>(42) }, Arc::new(callback));

        assert_eq!(rx.recv_timeout(Duration::from_secs(5)).unwrap(), Ok(42));
    }

    #[test]
    fn test_cancel_reports_error() {
        let runtime = CallbackRuntime::with_threads(1).unwrap();
        let (tx, rx) = mpsc::channel();
        let callback = FnCallback::from_completion(move |value: Option<u32>, error| {
            tx.send((value, error.is_some())).unwrap();
        });

        let mut handle =
            runtime.spawn_with_callback(std::future::pending::<Result<u32>>(), Arc::new(callback));
        handle.cancel();

        assert!(handle.is_cancelled());
        assert_eq!(
            rx.recv_timeout(Duration::from_secs(5)).unwrap(),
            (None, true)
        );
    }

    #[test]
    fn test_dropped_handle_does_not_cancel() {
        let runtime = CallbackRuntime::with_threads(1).unwrap();
        let (tx, rx) = mpsc::channel();
        let callback = FnCallback::from_completion(move |value: Option<u32>, _| {
            tx.send(value).unwrap();
        });

        drop(runtime.spawn_with_callback(
            async {
                tokio::task::yield_now().await;
                Ok::<u32, DragonBallError>(5)
            },
            Arc::new(callback),
        ));

        assert_eq!(rx.recv_timeout(Duration::from_secs(5)).unwrap(), Some(5));
    }
}
