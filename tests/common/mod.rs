//! Fixture backends shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use postsgate::posts::{
    upstream_response, Post, PostWithoutId, PostsBackend, UpstreamError, UpstreamResponse,
};

/// Answers like the placeholder API does, from memory.
///
/// `get_posts` returns one post; `create_post` echoes the request back
/// with id `101`. Counts upstream calls.
#[derive(Default, Clone)]
pub struct Placeholder {
    pub calls: Arc<AtomicUsize>,
}

pub fn sample_post() -> Post {
    Post { id: 1, user_id: 2, title: "Hello World".into(), body: "Foo Bar".into() }
}

impl Placeholder {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostsBackend for Placeholder {
    async fn get_posts(&self) -> Result<UpstreamResponse, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let body = serde_json::to_vec(&vec![sample_post()]).expect("fixture encodes");
        Ok(upstream_response(200, body))
    }

    async fn create_post(&self, post: &PostWithoutId) -> Result<UpstreamResponse, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let created = post.clone().with_id(101);
        let body = serde_json::to_vec(&created).expect("fixture encodes");
        Ok(upstream_response(201, body))
    }
}

/// Every call answers with the same canned status and body.
pub struct Canned {
    pub status: u16,
    pub body: &'static str,
}

#[async_trait]
impl PostsBackend for Canned {
    async fn get_posts(&self) -> Result<UpstreamResponse, UpstreamError> {
        Ok(upstream_response(self.status, self.body))
    }

    async fn create_post(&self, _post: &PostWithoutId) -> Result<UpstreamResponse, UpstreamError> {
        Ok(upstream_response(self.status, self.body))
    }
}

/// Every call fails before a response arrives.
pub struct Down;

fn request_failed() -> UpstreamError {
    let err = reqwest::Client::new().get("not a url").build().unwrap_err();
    UpstreamError::from(err)
}

#[async_trait]
impl PostsBackend for Down {
    async fn get_posts(&self) -> Result<UpstreamResponse, UpstreamError> {
        Err(request_failed())
    }

    async fn create_post(&self, _post: &PostWithoutId) -> Result<UpstreamResponse, UpstreamError> {
        Err(request_failed())
    }
}
