//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and either an expected parse result or an expected error class. Results
//! are compared as typed values, not raw strings.

use catfact_core::{
    ApiError, BreedList, CatFact, CatFactClient, CatRequest, HttpMethod, HttpRequest, HttpResponse,
};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> CatFactClient {
    CatFactClient::new(BASE_URL)
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        other => panic!("unknown method: {other}"),
    }
}

fn check_request(name: &str, req: &HttpRequest, expected: &serde_json::Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    let path = expected["path"].as_str().unwrap();
    assert_eq!(req.url, format!("{BASE_URL}{path}"), "{name}: path");

    let expected_query: Vec<(String, String)> = expected["query"]
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let arr = pair.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect();
    assert_eq!(req.query, expected_query, "{name}: query");
}

fn simulated_response(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["body"].as_str().unwrap(),
    )
}

fn check_error(name: &str, case: &serde_json::Value, err: ApiError) {
    match case["expected_error"].as_str().unwrap() {
        "HttpStatus" => {
            let expected = case["expected_status"].as_u64().unwrap() as u16;
            assert_eq!(err.status(), Some(expected), "{name}: status");
        }
        "Decode" => assert!(
            matches!(err, ApiError::Decode(_)),
            "{name}: expected Decode, got {err:?}"
        ),
        other => panic!("{name}: unknown expected_error: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Fact
// ---------------------------------------------------------------------------

#[test]
fn fact_test_vectors() {
    let raw = include_str!("../../test-vectors/fact.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: CatRequest = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_get_cat_fact(input.length);
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_cat_fact(simulated_response(case));
        if case.get("expected_error").is_some() {
            check_error(name, case, result.unwrap_err());
        } else {
            let expected: CatFact =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Breeds
// ---------------------------------------------------------------------------

#[test]
fn breeds_test_vectors() {
    let raw = include_str!("../../test-vectors/breeds.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: CatRequest = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_get_cat_breeds(input.limit);
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_cat_breeds(simulated_response(case));
        if case.get("expected_error").is_some() {
            check_error(name, case, result.unwrap_err());
        } else {
            let expected: BreedList =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}
