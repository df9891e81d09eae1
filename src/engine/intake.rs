use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::future::{abortable, AbortHandle, Aborted};
use futures::FutureExt;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::{
    api::DynReservationAPI,
    entities::{BookingRequest, BookingStatus, Confirmation, Field, Fleet, PaymentMethod},
    error::{invalid_invocation_error, unexpected_error, Error},
    ui::{ScrollLock, Viewport},
};

/// One open instance of the booking modal.
#[derive(Debug)]
struct Flow {
    instance: Uuid,
    draft: BookingRequest,
    status: BookingStatus,
    submission: Option<AbortHandle>,
    _scroll_lock: ScrollLock,
}

impl Flow {
    fn new(vehicle_type: Option<String>, scroll_lock: ScrollLock) -> Self {
        Self {
            instance: Uuid::new_v4(),
            draft: BookingRequest::new(vehicle_type),
            status: BookingStatus::Idle,
            submission: None,
            _scroll_lock: scroll_lock,
        }
    }

    fn accepts_edits(&self) -> bool {
        match self.status {
            BookingStatus::Idle | BookingStatus::Error { reason: _ } => true,
            _ => false,
        }
    }
}

impl Drop for Flow {
    fn drop(&mut self) {
        if let Some(submission) = self.submission.take() {
            tracing::info!("abandoning in-flight submission for flow {}", self.instance);
            submission.abort();
        }
    }
}

/// What the modal renders from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowSnapshot {
    pub instance: Uuid,
    pub draft: BookingRequest,
    pub status: BookingStatus,
}

impl FlowSnapshot {
    pub fn submit_enabled(&self) -> bool {
        self.status.accepts_submission()
    }
}

/// Booking modal controller. At most one flow is open; opening another replaces it.
#[derive(Clone)]
pub struct BookingIntake {
    fleet: Arc<Fleet>,
    reservations: DynReservationAPI,
    viewport: Viewport,
    flow: Arc<Mutex<Option<Flow>>>,
}

impl BookingIntake {
    pub fn new(fleet: Arc<Fleet>, reservations: DynReservationAPI, viewport: Viewport) -> Self {
        Self {
            fleet,
            reservations,
            viewport,
            flow: Arc::new(Mutex::new(None)),
        }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    #[tracing::instrument(skip(self))]
    pub async fn open(&self, vehicle_type: Option<String>) -> Uuid {
        let flow = Flow::new(vehicle_type, self.viewport.lock_scroll());
        let instance = flow.instance;

        let mut guard = self.flow.lock().await;
        if let Some(previous) = guard.replace(flow) {
            tracing::info!("booking flow {} replaced", previous.instance);
        }

        tracing::info!("booking flow {} opened", instance);
        instance
    }

    #[tracing::instrument(skip(self))]
    pub async fn close(&self) {
        let closed = self.flow.lock().await.take();

        if let Some(flow) = closed {
            tracing::info!(
                "booking flow {} closed while {}",
                flow.instance,
                flow.status.name()
            );
        }
    }

    pub async fn is_open(&self) -> bool {
        self.flow.lock().await.is_some()
    }

    pub async fn snapshot(&self) -> Option<FlowSnapshot> {
        self.flow.lock().await.as_ref().map(|flow| FlowSnapshot {
            instance: flow.instance,
            draft: flow.draft.clone(),
            status: flow.status.clone(),
        })
    }

    pub async fn status(&self) -> Option<BookingStatus> {
        self.flow.lock().await.as_ref().map(|flow| flow.status.clone())
    }

    pub async fn edit(&self, field: Field, value: impl Into<String>) -> Result<(), Error> {
        let value = value.into();
        self.with_editable_draft(|draft| draft.set(field, value)).await
    }

    pub async fn set_payment_method(&self, payment_method: PaymentMethod) -> Result<(), Error> {
        self.with_editable_draft(|draft| draft.payment_method = payment_method)
            .await
    }

    pub async fn set_consent(&self, consent: bool) -> Result<(), Error> {
        self.with_editable_draft(|draft| draft.consent = consent).await
    }

    async fn with_editable_draft<F>(&self, update: F) -> Result<(), Error>
    where
        F: FnOnce(&mut BookingRequest),
    {
        let mut guard = self.flow.lock().await;
        let flow = guard.as_mut().ok_or_else(invalid_invocation_error)?;

        if !flow.accepts_edits() {
            return Err(invalid_invocation_error());
        }

        update(&mut flow.draft);
        Ok(())
    }

    /// Validates the draft and hands it to the reservations collaborator. The returned
    /// handle finishes once the outcome has been applied or discarded.
    #[tracing::instrument(skip(self))]
    pub async fn submit(&self) -> Result<JoinHandle<()>, Error> {
        let mut guard = self.flow.lock().await;
        let flow = guard.as_mut().ok_or_else(invalid_invocation_error)?;

        if !flow.status.accepts_submission() {
            tracing::warn!(
                "submit ignored for flow {} while {}",
                flow.instance,
                flow.status.name()
            );
            return Err(invalid_invocation_error());
        }

        if let Err(err) = flow.draft.validate(&self.fleet) {
            tracing::warn!("booking flow {} failed validation: {}", flow.instance, err);
            return Err(err);
        }

        let request = flow.draft.clone();
        let reservations = self.reservations.clone();
        let (call, submission) =
            abortable(async move { reservations.submit_booking(request).await });

        flow.status = BookingStatus::Submitting;
        flow.submission = Some(submission);

        let instance = flow.instance;
        let state = self.flow.clone();

        tracing::info!("booking flow {} submitting", instance);

        Ok(tokio::spawn(async move {
            let outcome = match AssertUnwindSafe(call).catch_unwind().await {
                Ok(Ok(result)) => result,
                Ok(Err(Aborted)) => {
                    tracing::info!("submission for flow {} aborted", instance);
                    return;
                }
                Err(_) => {
                    tracing::warn!("submission for flow {} panicked", instance);
                    Err(unexpected_error())
                }
            };

            complete(&state, instance, outcome).await;
        }))
    }
}

async fn complete(
    state: &Mutex<Option<Flow>>,
    instance: Uuid,
    outcome: Result<Confirmation, Error>,
) {
    let mut guard = state.lock().await;

    let flow = match guard.as_mut() {
        Some(flow) if flow.instance == instance && flow.status.is_submitting() => flow,
        _ => {
            tracing::warn!("discarding outcome for stale booking flow {}", instance);
            return;
        }
    };

    flow.submission = None;
    flow.status = match outcome {
        Ok(confirmation) => {
            tracing::info!(
                "booking flow {} confirmed as {}",
                instance,
                confirmation.reference
            );
            BookingStatus::Success { confirmation }
        }
        Err(err) => {
            tracing::warn!("booking flow {} failed: {}", instance, err);
            BookingStatus::Error {
                reason: err.message,
            }
        }
    };
}
