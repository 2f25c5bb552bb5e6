//! Session controller boundary
//!
//! Owns the connection lifecycle toward the voice-agent backend. The UI
//! sends fire-and-forget commands over a crossbeam channel and drains
//! events once per frame; a dedicated worker thread hosts the tokio
//! runtime the backend integration runs on.
//!
//! The demo driver below stands where the real agent connection would
//! plug in: it walks a scripted lesson so the status view has live,
//! externally driven state to reflect.

use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use crossbeam_channel::{bounded, Receiver, Sender};
use tokio::time::sleep;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::SessionSnapshot;
use crate::{DeckError, Result};

/// How often the worker checks for commands and due script steps
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Commands the UI can issue; all fire-and-forget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Start,
    End,
    Shutdown,
}

/// Events emitted by the controller worker
#[derive(Debug, Clone)]
pub enum SessionEvent {
    Connecting,
    Connected {
        session_id: Uuid,
        started_at: DateTime<Local>,
    },
    SnapshotUpdated(SessionSnapshot),
    Ended,
    Error(String),
}

/// Pacing for the demo driver
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Simulated connection handshake time
    pub connect_delay: Duration,
    /// Time between scripted lesson steps
    pub step_interval: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            connect_delay: Duration::from_millis(600),
            step_interval: Duration::from_secs(6),
        }
    }
}

/// Handle to the session controller worker
pub struct SessionController {
    command_tx: Sender<SessionCommand>,
    event_rx: Receiver<SessionEvent>,
    worker: Option<JoinHandle<()>>,
}

impl SessionController {
    /// Spawn the worker thread hosting the session runtime
    pub fn spawn(config: ControllerConfig) -> Result<Self> {
        let (command_tx, command_rx) = bounded(16);
        let (event_tx, event_rx) = bounded(64);

        let worker = thread::Builder::new()
            .name("session-controller".into())
            .spawn(move || run_worker(config, command_rx, event_tx))
            .map_err(|e| DeckError::ControllerError(format!("failed to spawn worker: {e}")))?;

        Ok(Self {
            command_tx,
            event_rx,
            worker: Some(worker),
        })
    }

    /// Request a session start; fire-and-forget
    pub fn start(&self) {
        if self.command_tx.try_send(SessionCommand::Start).is_err() {
            warn!("session start dropped: controller not accepting commands");
        }
    }

    /// Request a session end; fire-and-forget
    pub fn end(&self) {
        if self.command_tx.try_send(SessionCommand::End).is_err() {
            warn!("session end dropped: controller not accepting commands");
        }
    }

    /// Drain pending events without blocking
    pub fn poll(&self) -> Vec<SessionEvent> {
        self.event_rx.try_iter().collect()
    }

    /// Receiver for callers that want to block on events
    pub fn events(&self) -> &Receiver<SessionEvent> {
        &self.event_rx
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        let _ = self.command_tx.try_send(SessionCommand::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn run_worker(
    config: ControllerConfig,
    command_rx: Receiver<SessionCommand>,
    event_tx: Sender<SessionEvent>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            let _ = event_tx.try_send(SessionEvent::Error(format!(
                "failed to build session runtime: {err}"
            )));
            error!("failed to build session runtime: {err}");
            return;
        }
    };

    runtime.block_on(async move {
        let mut session: Option<LessonScript> = None;

        loop {
            while let Ok(command) = command_rx.try_recv() {
                match command {
                    SessionCommand::Start => {
                        if session.is_some() {
                            debug!("start ignored: session already active");
                            continue;
                        }
                        let _ = event_tx.try_send(SessionEvent::Connecting);
                        sleep(config.connect_delay).await;

                        let session_id = Uuid::new_v4();
                        info!(%session_id, "session connected");
                        let _ = event_tx.try_send(SessionEvent::Connected {
                            session_id,
                            started_at: Local::now(),
                        });

                        let script = LessonScript::new(config.step_interval);
                        let _ = event_tx.try_send(SessionEvent::SnapshotUpdated(script.current()));
                        session = Some(script);
                    }
                    SessionCommand::End => {
                        if session.take().is_some() {
                            info!("session ended");
                            let _ = event_tx.try_send(SessionEvent::Ended);
                        } else {
                            debug!("end ignored: no active session");
                        }
                    }
                    SessionCommand::Shutdown => return,
                }
            }

            if let Some(script) = session.as_mut() {
                if let Some(snapshot) = script.advance() {
                    debug!(mode = ?snapshot.mode, "lesson advanced");
                    let _ = event_tx.try_send(SessionEvent::SnapshotUpdated(snapshot));
                }
            }

            sleep(POLL_INTERVAL).await;
        }
    });
}

/// Scripted stand-in for an agent-driven lesson
struct LessonScript {
    steps: Vec<SessionSnapshot>,
    position: usize,
    step_interval: Duration,
    next_step_at: Instant,
}

impl LessonScript {
    fn new(step_interval: Duration) -> Self {
        Self {
            steps: lesson_steps(),
            position: 0,
            step_interval,
            next_step_at: Instant::now() + step_interval,
        }
    }

    fn current(&self) -> SessionSnapshot {
        self.steps[self.position].clone()
    }

    /// The next step's snapshot, once it is due; `None` otherwise
    fn advance(&mut self) -> Option<SessionSnapshot> {
        if self.position + 1 >= self.steps.len() {
            return None;
        }
        if Instant::now() < self.next_step_at {
            return None;
        }
        self.position += 1;
        self.next_step_at = Instant::now() + self.step_interval;
        Some(self.current())
    }
}

fn lesson_steps() -> Vec<SessionSnapshot> {
    vec![
        step("select", "matthew", ""),
        step("learn", "matthew", "variables"),
        step("quiz", "en-US-ken", "variables"),
        step("teach_back", "alicia", "variables"),
        step("learn", "matthew", "loops"),
        step("quiz", "en-US-ken", "loops"),
        step("teach_back", "alicia", "loops"),
    ]
}

fn step(mode: &str, voice: &str, concept: &str) -> SessionSnapshot {
    SessionSnapshot {
        mode: Some(mode.to_string()),
        voice: Some(voice.to_string()),
        concept: if concept.is_empty() {
            None
        } else {
            Some(concept.to_string())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Mode;

    fn fast_config() -> ControllerConfig {
        ControllerConfig {
            connect_delay: Duration::from_millis(5),
            step_interval: Duration::from_millis(10),
        }
    }

    fn recv(controller: &SessionController) -> SessionEvent {
        controller
            .events()
            .recv_timeout(Duration::from_secs(5))
            .expect("controller should emit an event")
    }

    #[test]
    fn test_start_produces_connect_sequence() {
        let controller = SessionController::spawn(fast_config()).unwrap();
        controller.start();

        assert!(matches!(recv(&controller), SessionEvent::Connecting));
        assert!(matches!(recv(&controller), SessionEvent::Connected { .. }));

        match recv(&controller) {
            SessionEvent::SnapshotUpdated(snapshot) => {
                assert_eq!(snapshot.current_mode(), Mode::Select);
                assert!(snapshot.current_concept().is_none());
            }
            other => panic!("expected initial snapshot, got {other:?}"),
        }
    }

    #[test]
    fn test_lesson_advances_past_select() {
        let controller = SessionController::spawn(fast_config()).unwrap();
        controller.start();

        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            assert!(Instant::now() < deadline, "lesson never advanced");
            if let SessionEvent::SnapshotUpdated(snapshot) = recv(&controller) {
                if snapshot.current_mode() == Mode::Learn {
                    assert_eq!(snapshot.current_concept(), Some("variables"));
                    break;
                }
            }
        }
    }

    #[test]
    fn test_end_emits_ended() {
        let controller = SessionController::spawn(fast_config()).unwrap();
        controller.start();
        controller.end();

        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            assert!(Instant::now() < deadline, "session never ended");
            if matches!(recv(&controller), SessionEvent::Ended) {
                break;
            }
        }
    }

    #[test]
    fn test_end_without_session_is_silent() {
        let controller = SessionController::spawn(fast_config()).unwrap();
        controller.end();

        let result = controller.events().recv_timeout(Duration::from_millis(200));
        assert!(result.is_err(), "no event expected, got {result:?}");
    }

    #[test]
    fn test_lesson_script_ordering() {
        let steps = lesson_steps();
        assert_eq!(steps[0].current_mode(), Mode::Select);
        assert_eq!(steps[1].current_mode(), Mode::Learn);
        assert_eq!(steps[2].current_mode(), Mode::Quiz);
        assert_eq!(steps[3].current_mode(), Mode::TeachBack);
        // Every step past the first carries a concept
        assert!(steps.iter().skip(1).all(|s| s.current_concept().is_some()));
    }
}
