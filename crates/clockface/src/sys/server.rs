use crate::events::AppEvent;
use async_channel::Sender;
use dialkit::ipc::{Request, SOCKET_PATH};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::{UnixListener, UnixStream};

pub async fn run_server(tx: Sender<AppEvent>) {
    // stale socket from a previous run
    if std::fs::metadata(SOCKET_PATH).is_ok() {
        let _ = std::fs::remove_file(SOCKET_PATH);
    }

    let listener = match UnixListener::bind(SOCKET_PATH) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket: {}", e);
            return;
        }
    };
    log::info!("Listening for commands on {}", SOCKET_PATH);

    loop {
        match listener.accept().await {
            Ok((stream, _)) => {
                tokio::spawn(handle_client(stream, tx.clone()));
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}

async fn handle_client(mut stream: UnixStream, tx: Sender<AppEvent>) {
    let mut lines = BufReader::new(&mut stream).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Request>() {
            Ok(request) => {
                log::debug!("Received '{}'", request);
                if tx.send(AppEvent::from(request)).await.is_err() {
                    return;
                }
            }
            Err(e) => log::warn!("Ignoring '{}': {}", line.trim(), e),
        }
    }
}
