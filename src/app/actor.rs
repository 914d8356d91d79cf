//! Router actor - message loop feeding text actions into the router

use std::time::Duration;

use tokio::sync::mpsc;

use crate::app::Router;

/// How often finished network requests are picked up while idle
const RESPONSE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Sole owner of the router; runs actions in the order they arrive
pub struct RouterActor {
    router: Router,
}

impl RouterActor {
    pub fn new(router: Router) -> Self {
        RouterActor { router }
    }

    /// Run the actor message loop until `Exit` or the sender hangs up.
    /// Settings are saved on the way out.
    pub async fn run(mut self, mut action_rx: mpsc::UnboundedReceiver<String>) -> Router {
        let mut poll = tokio::time::interval(RESPONSE_POLL_INTERVAL);

        while self.router.is_running() {
            tokio::select! {
                line = action_rx.recv() => match line {
                    Some(action) => {
                        self.router.execute_str(&action);
                        self.router.drain_responses();
                    }
                    None => break,
                },
                _ = poll.tick() => {
                    self.router.drain_responses();
                }
            }
        }

        tracing::info!("Router stopped");
        self.router.state().save_settings();
        self.router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::WindowKind;
    use crate::app::testing::TestRouter;

    #[tokio::test]
    async fn test_actor_runs_until_exit() {
        let t = TestRouter::new();
        let journal = t.journal.clone();
        let dir = t.dir;
        let (tx, rx) = mpsc::unbounded_channel();

        tx.send("MainDialog".to_string()).unwrap();
        tx.send("About".to_string()).unwrap();
        tx.send("Exit".to_string()).unwrap();
        tx.send("Filter".to_string()).unwrap();

        let router = RouterActor::new(t.router).run(rx).await;
        assert!(!router.is_running());
        assert_eq!(
            journal.borrow().created,
            vec![WindowKind::Main, WindowKind::About]
        );
        assert!(dir.path().join(crate::constants::SETTINGS_FILE).exists());
    }

    #[tokio::test]
    async fn test_actor_stops_when_sender_drops() {
        let t = TestRouter::new();
        let (tx, rx) = mpsc::unbounded_channel::<String>();
        drop(tx);

        let router = RouterActor::new(t.router).run(rx).await;
        assert!(router.is_running());
    }
}
