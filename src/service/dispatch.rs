//! Engine selection for auto-placement: the AI service is preferred when the
//! caller allows it, with the deterministic planner as the fallback.

use crate::error::ApiError;
use crate::types::layout::LayoutOutcome;
use tracing::info;

/// Anything that can place the furniture set inside a room.
pub trait LayoutEngine {
    fn auto_place(
        &self,
        room_width: f64,
        room_height: f64,
    ) -> impl Future<Output = Result<LayoutOutcome, ApiError>> + Send;
}

/// Two-way fallback: with `use_ai` the AI engine runs first, and its result
/// only stands when it actually used a model. With `use_ai == false` the AI
/// engine is never contacted.
pub async fn auto_place<A, F>(
    ai: &A,
    fallback: &F,
    use_ai: bool,
    room_width: f64,
    room_height: f64,
) -> Result<LayoutOutcome, ApiError>
where
    A: LayoutEngine + Sync,
    F: LayoutEngine + Sync,
{
    if use_ai {
        let outcome = ai.auto_place(room_width, room_height).await?;
        if outcome.model_used {
            return Ok(outcome);
        }
        info!("AI model unavailable upstream, falling back to deterministic planner");
    } else {
        info!("AI disabled by request, using deterministic planner");
    }
    fallback.auto_place(room_width, room_height).await
}
