//! Test fixtures and canned responses.

use http::header::CONTENT_TYPE;
use http::{HeaderValue, StatusCode};
use serde::Serialize;

use crate::models::{Hero, Transformation};
use crate::transport::HttpResponse;

/// Collection of commonly used test fixtures.
pub struct TestFixtures;

impl TestFixtures {
    /// User name used by login scenarios.
    pub const USER: &'static str = "SomeUser";

    /// Password used by login scenarios.
    pub const PASSWORD: &'static str = "SomePassword";

    /// Token returned by login scenarios.
    pub const TOKEN: &'static str = "SomeValidToken";

    /// Parent hero id used by transformation scenarios.
    pub const PARENT_HERO_ID: &'static str = "ParentHeroId";

    /// Photo URL of the sample hero.
    pub const GOKU_PHOTO: &'static str =
        "https://cdn.alfabetajuega.com/alfabetajuega/2020/12/goku1.jpg?width=300";
}

/// The sample hero used throughout the test suite.
pub fn goku() -> Hero {
    Hero {
        name: "Goku".to_string(),
        id: "1".to_string(),
        description: "Sobran las presentaciones cuando se habla de Goku.".to_string(),
        favorite: true,
        photo: TestFixtures::GOKU_PHOTO.to_string(),
    }
}

/// A sample transformation.
pub fn super_saiyan() -> Transformation {
    Transformation {
        name: "1. Super Saiyan".to_string(),
        id: "17824501-1106-4815-BC7A-BFDCCEE43CC9".to_string(),
        description: "La transformación más icónica de los saiyan.".to_string(),
        photo: "https://cdn.example.com/goku-ssj.jpg".to_string(),
    }
}

/// `count` copies of the sample hero.
pub fn heroes(count: usize) -> Vec<Hero> {
    std::iter::repeat_with(goku).take(count).collect()
}

/// `count` copies of the sample transformation.
pub fn transformations(count: usize) -> Vec<Transformation> {
    std::iter::repeat_with(super_saiyan).take(count).collect()
}

/// 200 response with a JSON body.
///
/// # Panics
/// Panics if `value` cannot be serialized.
pub fn json_response<T: Serialize + ?Sized>(value: &T) -> HttpResponse {
    let body = serde_json::to_vec(value).expect("fixture must serialize");
    HttpResponse::new(StatusCode::OK, body)
        .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
}

/// 200 response with a plain-text body.
pub fn text_response(text: &str) -> HttpResponse {
    HttpResponse::new(StatusCode::OK, text)
        .with_header(CONTENT_TYPE, HeaderValue::from_static("text/plain"))
}

/// Response with the given status and an empty body.
///
/// # Panics
/// Panics if `status` is outside 100..=999.
pub fn status_response(status: u16) -> HttpResponse {
    let status = StatusCode::from_u16(status).expect("fixture status must be valid");
    HttpResponse::new(status, Vec::new())
}
