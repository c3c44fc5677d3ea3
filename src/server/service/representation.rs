//! Player representation lifecycle.
//!
//! All status changes funnel through [`transition`], one explicit transition
//! function instead of direct assignments scattered across call sites. The
//! caller persists the returned status together with the matching agent
//! reference (see `PlayerRepository::update_representation`).

use entity::player::RepresentationStatus;

use crate::server::error::representation::RepresentationError;

/// Events that can move a player between representation states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepresentationEvent {
    /// Self-registration without claiming an agent.
    RegisterFree,
    /// Self-registration claiming an existing agent by id.
    ClaimAgent,
    /// Self-registration naming an agent by email only.
    RequestInvitation,
    /// A newly created agent account matched a pending invitation.
    AcceptInvitation,
    /// The claimed agent confirmed the representation.
    ConfirmRepresentation,
    /// The agent declined a claim or dropped the player.
    Release,
}

/// Computes the next representation status for a player.
///
/// Registration events only apply to the initial `FreeAgent` state (the
/// schema default a new player row starts from). Invalid pairs are rejected
/// rather than silently ignored.
pub fn transition(
    current: RepresentationStatus,
    event: RepresentationEvent,
) -> Result<RepresentationStatus, RepresentationError> {
    use RepresentationEvent::*;
    use RepresentationStatus::*;

    match (current, event) {
        (FreeAgent, RegisterFree) => Ok(FreeAgent),
        (FreeAgent, ClaimAgent) => Ok(PendingConfirmation),
        (FreeAgent, RequestInvitation) => Ok(PendingInvitation),
        (PendingInvitation, AcceptInvitation) => Ok(PendingConfirmation),
        (PendingConfirmation, ConfirmRepresentation) => Ok(Represented),
        (PendingConfirmation | PendingInvitation | Represented, Release) => Ok(FreeAgent),
        (from, event) => Err(RepresentationError::InvalidTransition { from, event }),
    }
}
