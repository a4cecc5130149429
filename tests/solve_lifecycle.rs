mod common;

use common::{ScriptedClient, answer, sample_image};
use futures::executor::block_on;
use sketch_solve::display::{DisplayBlock, present};
use sketch_solve::solve::CONNECTION_ERROR_LABEL;
use sketch_solve::{SolveError, SolveOrchestrator, SolveResult};

#[test]
fn test_success_lifecycle() {
    let client = ScriptedClient::default();
    let reply = client.expect_request();
    let mut solver = SolveOrchestrator::new();
    assert_eq!(solver.result(), &SolveResult::Idle);

    let request = solver.solve(&client, &sample_image());
    assert_eq!(solver.result(), &SolveResult::Pending);

    reply.send(Ok(answer("Result", "x = 2"))).unwrap();
    block_on(request);
    assert!(solver.poll());
    assert_eq!(solver.result(), &SolveResult::Success(answer("Result", "x = 2")));

    let blocks = present(solver.result());
    assert!(blocks.contains(&DisplayBlock::Label("Result".to_owned())));
    assert!(blocks.contains(&DisplayBlock::Answer(vec!["x = 2".to_owned()])));
}

#[test]
fn test_request_carries_data_url() {
    let client = ScriptedClient::default();
    let _reply = client.expect_request();
    let mut solver = SolveOrchestrator::new();

    let _request = solver.solve(&client, &sample_image());
    let requests = client.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].image.starts_with("data:image/jpeg;base64,"));
}

#[test]
fn test_failure_lifecycle() {
    let client = ScriptedClient::default();
    let reply = client.expect_request();
    let mut solver = SolveOrchestrator::new();

    let request = solver.solve(&client, &sample_image());
    reply
        .send(Err(SolveError::Status {
            status: 500,
            body: "Something went wrong on the server.".to_owned(),
        }))
        .unwrap();
    block_on(request);
    solver.poll();

    let SolveResult::Error(failure) = solver.result() else {
        panic!("expected an error, got {}", solver.result().name());
    };
    assert_eq!(failure.label, CONNECTION_ERROR_LABEL);
    assert!(!failure.answer.is_empty());
    assert!(failure.note.as_deref().unwrap().contains("Something went wrong"));
}

#[test]
fn test_dropped_request_becomes_error() {
    let client = ScriptedClient::default();
    let reply = client.expect_request();
    let mut solver = SolveOrchestrator::new();

    let request = solver.solve(&client, &sample_image());
    drop(reply);
    block_on(request);
    solver.poll();
    assert!(matches!(solver.result(), SolveResult::Error(_)));
}

#[test]
fn test_latest_request_wins_when_first_resolves_last() {
    let client = ScriptedClient::default();
    let first_reply = client.expect_request();
    let second_reply = client.expect_request();
    let mut solver = SolveOrchestrator::new();

    let first = solver.solve(&client, &sample_image());
    let second = solver.solve(&client, &sample_image());
    assert_eq!(solver.result(), &SolveResult::Pending);

    second_reply.send(Ok(answer("Second", "y = 3"))).unwrap();
    block_on(second);
    assert!(solver.poll());

    // The first request was aborted; even a late reply cannot land.
    let _ = first_reply.send(Ok(answer("First", "x = 1")));
    block_on(first);
    assert!(!solver.poll());
    assert_eq!(solver.result(), &SolveResult::Success(answer("Second", "y = 3")));
}

#[test]
fn test_stale_completion_is_discarded() {
    let client = ScriptedClient::default();
    let first_reply = client.expect_request();
    let _second_reply = client.expect_request();
    let mut solver = SolveOrchestrator::new();

    // The first request finishes, but a new one is issued before the UI polls.
    let first = solver.solve(&client, &sample_image());
    first_reply.send(Ok(answer("First", "x = 1"))).unwrap();
    block_on(first);
    let _second = solver.solve(&client, &sample_image());

    assert!(!solver.poll());
    assert_eq!(solver.result(), &SolveResult::Pending);
}

#[test]
fn test_reset_drops_in_flight_request() {
    let client = ScriptedClient::default();
    let reply = client.expect_request();
    let mut solver = SolveOrchestrator::new();

    let request = solver.solve(&client, &sample_image());
    solver.reset();
    assert_eq!(solver.result(), &SolveResult::Idle);

    let _ = reply.send(Ok(answer("Result", "x = 2")));
    block_on(request);
    assert!(!solver.poll());
    assert_eq!(solver.result(), &SolveResult::Idle);
}

#[test]
fn test_solve_again_after_success() {
    let client = ScriptedClient::default();
    let first_reply = client.expect_request();
    let second_reply = client.expect_request();
    let mut solver = SolveOrchestrator::new();

    let first = solver.solve(&client, &sample_image());
    first_reply.send(Ok(answer("Result", "x = 2"))).unwrap();
    block_on(first);
    solver.poll();

    let second = solver.solve(&client, &sample_image());
    assert_eq!(solver.result(), &SolveResult::Pending);
    second_reply
        .send(Ok(answer("Simplified", "4")))
        .unwrap();
    block_on(second);
    solver.poll();
    assert_eq!(solver.result(), &SolveResult::Success(answer("Simplified", "4")));
}
