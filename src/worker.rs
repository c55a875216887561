use crate::logger;
use crate::models::{GenReply, GenRequest};
use crate::service::GenerationClient;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

/// Long-lived worker that performs the blocking HTTP call off the event loop
/// thread. Replies carry the request id so the controller can drop the ones
/// a later submission has superseded.
pub fn spawn_generation_worker(
    reply_tx: Sender<GenReply>,
    request_rx: Receiver<GenRequest>,
) -> thread::JoinHandle<()> {
    thread::Builder::new()
        .name("mcq-quiz::generation_worker".to_string())
        .spawn(move || {
            let client = GenerationClient::from_env();
            logger::log(&format!("Generation worker using {}", client.url()));
            loop {
                match request_rx.recv() {
                    Ok(GenRequest::Generate {
                        request_id,
                        request,
                    }) => {
                        logger::log(&format!("Worker handling request {}", request_id));
                        match client.generate(&request) {
                            Ok(items) => {
                                let _ = reply_tx.send(GenReply::Questions { request_id, items });
                            }
                            Err(e) => {
                                logger::log(&format!("Worker error: {}", e));
                                let _ = reply_tx.send(GenReply::Failure {
                                    request_id,
                                    message: e.to_string(),
                                });
                            }
                        }
                    }
                    Err(_) => {
                        logger::log("Worker channel disconnected, exiting");
                        break;
                    }
                }
            }
        })
        .expect("Failed to spawn generation worker thread")
}
