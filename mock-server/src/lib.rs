use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::debug;

pub const DEFAULT_PER_PAGE: u32 = 25;

pub const FACTS: &[&str] = &[
    "Cats sleep 70% of their lives.",
    "A group of cats is called a clowder.",
    "Cats can rotate their ears 180 degrees.",
    "A cat can jump up to six times its length.",
    "Unlike dogs, cats do not have a sweet tooth.",
    "The oldest known pet cat existed 9,500 years ago.",
    "A cat's nose print is unique, much like a human's fingerprint.",
    "Cats make about 100 different sounds. Dogs make only about 10.",
    "Cats have five toes on their front paws, but only four on the back.",
];

pub const BREEDS: &[(&str, &str, &str, &str, &str)] = &[
    ("Abyssinian", "Ethiopia", "Natural/Standard", "Short", "Ticked"),
    ("Aegean", "Greece", "Natural/Standard", "Semi-long", "Bi- or tri-colored"),
    ("American Curl", "United States", "Mutation", "Short/Long", "All"),
    ("American Bobtail", "United States", "Mutation", "Short/Long", "All"),
    ("American Shorthair", "United States", "Natural", "Short", "All but colorpoint"),
    ("American Wirehair", "United States", "Mutation", "Rex", "All but colorpoint"),
    ("Arabian Mau", "Arabian Peninsula", "Natural", "Short", ""),
    ("Australian Mist", "Australia", "Crossbreed", "Short", "Spotted and Classic tabby"),
    ("Asian", "United Kingdom", "", "Short", "Evenly solid"),
    ("Asian Semi-longhair", "United Kingdom", "Crossbreed", "Semi-long", "Solid"),
    ("Balinese", "United States", "Crossbreed", "Long", "Colorpoint"),
    ("Bambino", "United States", "Crossbreed/Hybrid", "Hairless/Furless", ""),
];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatFact {
    pub fact: String,
    pub length: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Breed {
    pub breed: String,
    pub country: String,
    pub origin: String,
    pub coat: String,
    pub pattern: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PageLink {
    pub url: Option<String>,
    pub label: String,
    pub active: bool,
}

/// Mirrors the upstream envelope field for field. `per_page` is a string
/// when the caller passed `limit`, a number otherwise, as upstream does.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BreedPage {
    pub current_page: u32,
    pub data: Vec<Breed>,
    pub first_page_url: String,
    pub from: Option<u32>,
    pub last_page: u32,
    pub last_page_url: String,
    pub links: Vec<PageLink>,
    pub next_page_url: Option<String>,
    pub path: String,
    pub per_page: Value,
    pub prev_page_url: Option<String>,
    pub to: Option<u32>,
    pub total: u32,
}

#[derive(Debug, Deserialize)]
pub struct FactQuery {
    pub max_length: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct BreedQuery {
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

/// Rotates through matching facts so repeated calls vary.
pub type Cursor = Arc<AtomicUsize>;

pub fn app() -> Router {
    let cursor: Cursor = Arc::new(AtomicUsize::new(0));
    Router::new()
        .route("/fact", get(get_fact))
        .route("/breeds", get(get_breeds))
        .with_state(cursor)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn char_len(s: &str) -> u32 {
    s.chars().count() as u32
}

async fn get_fact(
    State(cursor): State<Cursor>,
    Query(query): Query<FactQuery>,
) -> Result<Json<CatFact>, (StatusCode, Json<Value>)> {
    let candidates: Vec<&str> = FACTS
        .iter()
        .copied()
        .filter(|f| query.max_length.is_none_or(|max| char_len(f) <= max))
        .collect();

    if candidates.is_empty() {
        debug!(max_length = ?query.max_length, "no fact short enough");
        return Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "No fact found for the given length" })),
        ));
    }

    let fact = candidates[cursor.fetch_add(1, Ordering::Relaxed) % candidates.len()];
    Ok(Json(CatFact {
        fact: fact.to_string(),
        length: char_len(fact),
    }))
}

async fn get_breeds(Query(query): Query<BreedQuery>) -> Json<BreedPage> {
    let per_page_raw = match query.limit {
        Some(limit) => Value::String(limit.to_string()),
        None => json!(DEFAULT_PER_PAGE),
    };
    let per_page = query.limit.filter(|&n| n > 0).unwrap_or(DEFAULT_PER_PAGE);
    let page = query.page.filter(|&n| n > 0).unwrap_or(1);
    Json(breed_page(page, per_page, per_page_raw))
}

fn page_url(page: u32) -> String {
    format!("/breeds?page={page}")
}

pub fn breed_page(page: u32, per_page: u32, per_page_raw: Value) -> BreedPage {
    let per_page = per_page.max(1);
    let total = BREEDS.len() as u32;
    let last_page = total.div_ceil(per_page).max(1);
    let start = page.saturating_sub(1).saturating_mul(per_page).min(total);
    let end = start.saturating_add(per_page).min(total);

    let data: Vec<Breed> = BREEDS[start as usize..end as usize]
        .iter()
        .map(|&(breed, country, origin, coat, pattern)| Breed {
            breed: breed.to_string(),
            country: country.to_string(),
            origin: origin.to_string(),
            coat: coat.to_string(),
            pattern: pattern.to_string(),
        })
        .collect();

    let prev_page_url = (page > 1).then(|| page_url(page - 1));
    let next_page_url = (page < last_page).then(|| page_url(page + 1));

    let mut links = vec![PageLink {
        url: prev_page_url.clone(),
        label: "&laquo; Previous".to_string(),
        active: false,
    }];
    links.extend((1..=last_page).map(|n| PageLink {
        url: Some(page_url(n)),
        label: n.to_string(),
        active: n == page,
    }));
    links.push(PageLink {
        url: next_page_url.clone(),
        label: "Next &raquo;".to_string(),
        active: false,
    });

    let (from, to) = if data.is_empty() {
        (None, None)
    } else {
        (Some(start + 1), Some(end))
    };

    BreedPage {
        current_page: page,
        data,
        first_page_url: page_url(1),
        from,
        last_page,
        last_page_url: page_url(last_page),
        links,
        next_page_url,
        path: "/breeds".to_string(),
        per_page: per_page_raw,
        prev_page_url,
        to,
        total,
    }
}
