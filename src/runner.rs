use crate::api::{ApiClient, Task};
use crate::wallet::{self, WalletStore};
use anyhow::Result;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};

/// Injectable inter-account pacing. Tests substitute [`DelayPolicy::none`]
/// for a deterministic run.
#[derive(Debug, Clone, Copy)]
pub struct DelayPolicy {
    between_accounts: Duration,
}

impl DelayPolicy {
    pub fn fixed(between_accounts: Duration) -> Self {
        Self { between_accounts }
    }

    pub fn none() -> Self {
        Self::fixed(Duration::ZERO)
    }

    pub fn duration(&self) -> Duration {
        self.between_accounts
    }

    pub async fn wait(&self) {
        if !self.between_accounts.is_zero() {
            sleep(self.between_accounts).await;
        }
    }
}

/// Drives the per-credential workflow: keypair generation, login, task
/// submission, and keypair persistence.
pub struct AccountRunner {
    client: ApiClient,
    store: WalletStore,
    delay: DelayPolicy,
}

impl AccountRunner {
    pub fn new(client: ApiClient, store: WalletStore, delay: DelayPolicy) -> Self {
        Self {
            client,
            store,
            delay,
        }
    }

    /// Processes every credential in order, 1-indexed. Each account runs
    /// inside its own failure boundary: an unexpected error is logged with
    /// the index and the run moves on. The delay applies between consecutive
    /// accounts, not after the last one.
    pub async fn run(&self, credentials: &[String]) {
        let total = credentials.len();

        for (i, init_data) in credentials.iter().enumerate() {
            let index = i + 1;
            info!("{}", "=".repeat(50));
            info!("Processing account {} of {}", index, total);
            info!("{}", "=".repeat(50));

            if let Err(e) = self.process_account(init_data, index).await {
                error!("Error processing account {}: {:?}", index, e);
            }

            if index < total {
                let wait = self.delay.duration();
                if !wait.is_zero() {
                    info!(
                        "Waiting {}s before processing next account...",
                        wait.as_secs()
                    );
                }
                self.delay.wait().await;
            }
        }
    }

    /// One account, start to finish. Expected remote failures (login, missing
    /// token) log and return `Ok(())` early; only unanticipated errors such
    /// as a failed disk write propagate to the boundary in [`Self::run`].
    ///
    /// The keypair is persisted once login yields a token, regardless of the
    /// task outcome for the account.
    pub async fn process_account(&self, init_data: &str, index: usize) -> Result<()> {
        let keypair = wallet::generate_keypair();
        info!(
            "[Account {}] Generated wallet address: {}",
            index, keypair.address
        );
        info!("[Account {}] Attempting login...", index);

        let login = match self.client.login(&keypair.address, init_data, None).await {
            Ok(response) => response,
            Err(e) => {
                error!("[Account {}] Login FAILED: {}", index, e);
                return Ok(());
            }
        };

        let token = match login.token {
            Some(token) => token,
            None => {
                error!("[Account {}] No token found in login response!", index);
                return Ok(());
            }
        };
        info!("[Account {}] Login SUCCESS", index);

        self.process_tasks(&token, index).await;

        let path = self.store.persist(&keypair, index)?;
        info!(
            "[Account {}] Wallet details saved to {}",
            index,
            path.display()
        );

        Ok(())
    }

    /// Fetches the account's task history and submits each incomplete task.
    /// A fetch failure skips submission entirely; a single submit failure
    /// does not stop the remaining tasks.
    async fn process_tasks(&self, token: &str, index: usize) {
        let tasks = match self.client.task_history(token).await {
            Ok(tasks) => tasks,
            Err(e) => {
                error!("[Account {}] Failed to get task list: {}", index, e);
                return;
            }
        };

        let incomplete: Vec<&Task> = tasks.iter().filter(|t| t.is_incomplete()).collect();
        info!(
            "[Account {}] {} of {} tasks pending",
            index,
            incomplete.len(),
            tasks.len()
        );

        for task in incomplete {
            info!("Processing task: {} (ID: {})", task.name, task.id);
            match self.client.submit_task(token, task.id).await {
                Ok(result) if result.success => {
                    info!("Task SUCCESS: {}", task.name);
                }
                Ok(_) => {
                    warn!("Task FAILED: {}", task.name);
                }
                Err(e) => {
                    warn!("Task FAILED: {} ({})", task.name, e);
                }
            }
        }
    }
}
