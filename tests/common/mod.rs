#![allow(dead_code)]

use std::sync::Mutex;

use geniusing::{
    Res,
    genius::Genius,
    http::{Fetcher, RawResponse, Request, Transport},
};
use serde_json::{Value, json};

pub const API_URL: &str = "http://genius.test";

type Handler = Box<dyn Fn(&Request, usize) -> Res<RawResponse>>;

/// Transport answering from a closure and recording every request.
///
/// The handler also receives how many identical requests came before, so
/// it can fail a few times before answering.
pub struct MockTransport {
    handler: Handler,
    requests: Mutex<Vec<Request>>,
}

impl MockTransport {
    pub fn new(handler: impl Fn(&Request, usize) -> Res<RawResponse> + 'static) -> Self {
        Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, url: &str) -> usize {
        self.requests().iter().filter(|r| r.url == url).count()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: &Request) -> Res<RawResponse> {
        let seen = {
            let mut requests = self.requests.lock().unwrap();
            let seen = requests.iter().filter(|r| *r == request).count();
            requests.push(request.clone());
            seen
        };
        (self.handler)(request, seen)
    }
}

pub fn respond(status: u16, body: impl Into<String>) -> Res<RawResponse> {
    Ok(RawResponse {
        status,
        body: body.into(),
    })
}

pub fn ok_json(value: Value) -> Res<RawResponse> {
    respond(200, value.to_string())
}

pub fn not_found() -> Res<RawResponse> {
    respond(404, "not found")
}

pub fn page(request: &Request) -> u32 {
    request
        .param("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(0)
}

pub fn genius(transport: MockTransport) -> Genius<MockTransport> {
    Genius::new(Fetcher::new(transport).with_attempts(3), API_URL)
}

pub fn search_page(artists: &[(u64, &str)]) -> Value {
    let hits: Vec<Value> = artists
        .iter()
        .map(|(id, name)| json!({"result": {"primary_artist": {"id": id, "name": name}}}))
        .collect();
    json!({"response": {"hits": hits}})
}

pub fn songs_page(songs: &[(u64, u64)]) -> Value {
    let songs: Vec<Value> = songs
        .iter()
        .map(|(id, primary)| {
            json!({"id": id, "title": "listed", "primary_artist": {"id": primary}})
        })
        .collect();
    json!({"response": {"songs": songs}})
}

pub fn song_detail(id: u64, title: &str, artist: (u64, &str)) -> Value {
    json!({"response": {"song": {
        "id": id,
        "title": title,
        "url": lyrics_url(id),
        "primary_artist": {"id": artist.0, "name": artist.1},
        "producer_artists": [{"id": 100, "name": "P1"}, {"id": 101, "name": "P2"}],
        "featured_artists": [],
        "song_relationships": [
            {"relationship_type": "samples", "type": "samples", "url": null, "songs": [
                {"id": 900, "primary_artist": {"id": 200, "name": "James Brown"}},
                {"id": 901, "primary_artist": {"id": 201, "name": "Trouble Funk"}}
            ]},
            {"relationship_type": "sampled_in", "type": "sampled_in", "url": null, "songs": [
                {"id": 902, "primary_artist": {"id": 202, "name": "Someone Else"}}
            ]}
        ]
    }}})
}

pub fn lyrics_url(id: u64) -> String {
    format!("{}/lyrics/{}", API_URL, id)
}

pub fn lyrics_html(lines: &[&str]) -> String {
    let anchors: String = lines
        .iter()
        .map(|l| format!("<a href=\"#\">{}</a><br>", l))
        .collect();
    format!(
        "<html><body><div class=\"lyrics\"><p>{}</p></div></body></html>",
        anchors
    )
}
