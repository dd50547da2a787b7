//! Spawns completion requests in a background thread with a result channel.

use std::sync::Arc;
use std::sync::mpsc;

use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::core::config::Config;
use crate::core::llm;

use super::PendingAsk;

/// Spawn a completion request for `prompt`. Returns a PendingAsk holding the
/// result channel and the cancellation token; the main loop polls it.
pub(crate) fn spawn_ask(rt: &Arc<Runtime>, config: Arc<Config>, prompt: String) -> PendingAsk {
    let (result_tx, result_rx) = mpsc::channel();
    let cancel_token = CancellationToken::new();
    let cancel_token_clone = cancel_token.clone();
    let rt_clone = Arc::clone(rt);

    std::thread::spawn(move || {
        let result = rt_clone.block_on(llm::complete(
            config.as_ref(),
            &prompt,
            Some(&cancel_token_clone),
        ));
        let _ = result_tx.send(result);
    });

    PendingAsk {
        result_rx,
        cancel_token,
    }
}
