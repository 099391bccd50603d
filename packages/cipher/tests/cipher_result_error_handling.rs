//! `CipherResult` futures must resolve once and never panic on extra polls

use cipherlab_cipher::{CipherError, CipherResult, CipherResultWithHandler};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, Waker};
use tokio::sync::oneshot;

struct NoopWaker;

impl std::task::Wake for NoopWaker {
    fn wake(self: Arc<Self>) {}
}

fn noop_waker() -> Waker {
    Arc::new(NoopWaker).into()
}

fn describe(result: Result<Vec<u8>, CipherError>) -> String {
    match result {
        Ok(data) => format!("{} bytes", data.len()),
        Err(e) => format!("error: {e}"),
    }
}

#[test]
fn test_handler_runs_once_then_stays_pending() {
    let mut future: CipherResultWithHandler<_> =
        CipherResult::ready(Ok(vec![1, 2, 3, 4])).on_result(describe);

    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);

    match Pin::new(&mut future).poll(&mut cx) {
        Poll::Ready(message) => assert_eq!(message, "4 bytes"),
        Poll::Pending => panic!("ready result should resolve on first poll"),
    }
    for _ in 0..5 {
        assert!(Pin::new(&mut future).poll(&mut cx).is_pending());
    }
}

#[test]
fn test_handler_sees_errors() {
    let mut future = CipherResult::error(CipherError::DecryptionFailed).on_result(describe);

    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);

    match Pin::new(&mut future).poll(&mut cx) {
        Poll::Ready(message) => assert_eq!(message, "error: Decryption failed"),
        Poll::Pending => panic!("error result should resolve on first poll"),
    }
}

#[test]
fn test_dropped_sender_becomes_internal_error() {
    let (tx, rx) = oneshot::channel::<cipherlab_cipher::Result<Vec<u8>>>();
    let mut future = CipherResult::from_receiver(rx);
    drop(tx);

    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);

    match Pin::new(&mut future).poll(&mut cx) {
        Poll::Ready(Err(CipherError::Internal(msg))) => {
            assert!(msg.contains("dropped"));
        }
        other => panic!("expected internal error, got {other:?}"),
    }
}

#[test]
fn test_pending_until_sender_delivers() {
    let (tx, rx) = oneshot::channel();
    let mut future = CipherResult::from_receiver(rx).on_result(|r| r.map(|v| v.len()).ok());

    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);
    assert!(Pin::new(&mut future).poll(&mut cx).is_pending());

    tx.send(Ok(vec![0u8; 7])).expect("receiver alive");
    match Pin::new(&mut future).poll(&mut cx) {
        Poll::Ready(len) => assert_eq!(len, Some(7)),
        Poll::Pending => panic!("value was sent"),
    }
}

#[test]
fn test_poll_after_completion_is_an_error_not_a_panic() {
    let mut future = CipherResult::ready(Ok(vec![9, 10, 11]));

    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);

    assert!(matches!(
        Pin::new(&mut future).poll(&mut cx),
        Poll::Ready(Ok(ref bytes)) if bytes == &[9, 10, 11]
    ));
    assert!(matches!(
        Pin::new(&mut future).poll(&mut cx),
        Poll::Ready(Err(CipherError::Internal(_)))
    ));
}

#[tokio::test]
async fn test_spawn_blocking_inside_runtime() {
    let value = CipherResult::spawn_blocking(|| Ok(b"from the pool".to_vec()))
        .await
        .expect("job succeeds");
    assert_eq!(value, b"from the pool");

    let err = CipherResult::spawn_blocking(|| Err(CipherError::validation("nope")))
        .await
        .expect_err("job fails");
    assert!(matches!(err, CipherError::Validation(ref m) if m == "nope"));
}

#[test]
fn test_cipher_error_normalization() {
    use cipherlab_common::ErrorKind;

    let err: cipherlab_common::Error = CipherError::MalformedEnvelope {
        minimum: 28,
        actual: 3,
    }
    .into();
    assert_eq!(err.kind(), &ErrorKind::MalformedEnvelope);
    assert_eq!(err.get_context(), Some("need at least 28 bytes, got 3"));

    let err: cipherlab_common::Error = CipherError::DecryptionFailed.into();
    assert_eq!(err.kind(), &ErrorKind::DecryptionFailed);
    assert_eq!(
        err.to_string(),
        "Decryption failed: wrong password or corrupted ciphertext"
    );

    let err: cipherlab_common::Error = CipherError::EncryptionFailed("provider".into()).into();
    assert_eq!(err.kind(), &ErrorKind::Internal);
}
