/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 *   - a credential store client would live here once keys are verified
 * - Must stay cheap to Clone
 */
#[derive(Clone, Debug, Default)]
pub struct AppState;

impl AppState {
    pub fn new() -> Self {
        Self
    }
}
