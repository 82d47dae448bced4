mod quiz_flow;
mod results;
mod state;
mod upload;

pub use quiz_flow::QuizFlowView;
pub use state::ViewError;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
