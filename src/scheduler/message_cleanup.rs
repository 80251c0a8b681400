use std::{collections::HashMap, sync::Arc, time::Duration};
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};
use uuid::Uuid;

use crate::{discord::DiscordGateway, error::AppError};

/// Delayed deletion of resolved review messages.
///
/// Each scheduled deletion is a one-shot job keyed by message id, so it can be cancelled when
/// the message is deleted by someone else first. Cloning shares the scheduler and job table.
#[derive(Clone)]
pub struct MessageCleanupScheduler {
    scheduler: JobScheduler,
    discord: Arc<dyn DiscordGateway>,
    delay: Duration,
    jobs: Arc<Mutex<HashMap<u64, Uuid>>>,
}

impl MessageCleanupScheduler {
    /// Creates and starts the cleanup scheduler.
    ///
    /// # Arguments
    /// - `discord` - Gateway used to delete messages
    /// - `delay` - Time between scheduling and deleting a message
    ///
    /// # Returns
    /// - `Ok(MessageCleanupScheduler)` - Running scheduler
    /// - `Err(AppError::SchedulerErr)` - Failed to create or start the scheduler
    pub async fn start(
        discord: Arc<dyn DiscordGateway>,
        delay: Duration,
    ) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new().await?;
        scheduler.start().await?;

        tracing::info!("Message cleanup scheduler started");

        Ok(Self {
            scheduler,
            discord,
            delay,
            jobs: Arc::new(Mutex::new(HashMap::new())),
        })
    }

    /// Schedules a message for deletion after the configured delay.
    ///
    /// A failed deletion is logged; the message most likely no longer exists.
    ///
    /// # Arguments
    /// - `channel_id` - Channel the message was posted in
    /// - `message_id` - Message to delete
    ///
    /// # Returns
    /// - `Ok(())` - Deletion scheduled
    /// - `Err(AppError::SchedulerErr)` - Failed to create or add the job
    pub async fn schedule_delete(&self, channel_id: u64, message_id: u64) -> Result<(), AppError> {
        let discord = self.discord.clone();
        let jobs = self.jobs.clone();

        let job = Job::new_one_shot_async(self.delay, move |_uuid, _lock| {
            let discord = discord.clone();
            let jobs = jobs.clone();

            Box::pin(async move {
                jobs.lock().await.remove(&message_id);

                match discord.delete_message(channel_id, message_id).await {
                    Ok(()) => tracing::debug!("Deleted resolved review message {}", message_id),
                    Err(e) => {
                        tracing::warn!("Failed to delete review message {}: {}", message_id, e)
                    }
                }
            })
        })?;

        // Tracked before the job is added, a short delay can fire it immediately
        self.jobs.lock().await.insert(message_id, job.guid());
        if let Err(e) = self.scheduler.add(job).await {
            self.jobs.lock().await.remove(&message_id);
            return Err(e.into());
        }

        Ok(())
    }

    /// Cancels the scheduled deletion of a message.
    ///
    /// # Returns
    /// - `Ok(true)` - A pending deletion was cancelled
    /// - `Ok(false)` - No deletion was scheduled for this message
    /// - `Err(AppError::SchedulerErr)` - Failed to remove the job
    pub async fn cancel(&self, message_id: u64) -> Result<bool, AppError> {
        let Some(uuid) = self.jobs.lock().await.remove(&message_id) else {
            return Ok(false);
        };

        self.scheduler.remove(&uuid).await?;

        Ok(true)
    }
}
