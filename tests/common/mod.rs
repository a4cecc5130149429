#![allow(dead_code)]

use futures::FutureExt as _;
use futures::channel::oneshot;
use futures::future::BoxFuture;
use parking_lot::Mutex;
use sketch_solve::solve::SolveRequest;
use sketch_solve::{CanvasSurface, EncodedImage, ImageFormat, SolveAnswer, SolveClient, SolveError};
use std::collections::VecDeque;

pub type Reply = Result<SolveAnswer, SolveError>;

/// A solver whose replies are released by the test, one channel per request.
#[derive(Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<oneshot::Receiver<Reply>>>,
    requests: Mutex<Vec<SolveRequest>>,
}

impl ScriptedClient {
    /// Queue the reply for the next request and return the handle that releases it.
    pub fn expect_request(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.lock().push_back(rx);
        tx
    }

    pub fn requests(&self) -> Vec<SolveRequest> {
        self.requests.lock().clone()
    }
}

impl SolveClient for ScriptedClient {
    fn solve(&self, request: SolveRequest) -> BoxFuture<'static, Reply> {
        self.requests.lock().push(request);
        let reply = self.replies.lock().pop_front();

        async move {
            match reply {
                Some(reply) => reply.await.unwrap_or_else(|_| Err(dropped())),
                None => Err(dropped()),
            }
        }
        .boxed()
    }
}

fn dropped() -> SolveError {
    SolveError::Status {
        status: 599,
        body: "reply dropped".to_owned(),
    }
}

pub fn answer(label: &str, text: &str) -> SolveAnswer {
    SolveAnswer {
        label: label.to_owned(),
        expression: None,
        answer: text.to_owned(),
        note: None,
    }
}

pub fn sample_image() -> EncodedImage {
    let mut canvas = CanvasSurface::default();
    canvas.initialize(egui::vec2(32.0, 32.0));
    canvas.serialize(ImageFormat::Jpeg { quality: 95 }).unwrap()
}
