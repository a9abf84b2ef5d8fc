/// Accumulator threaded through the checkpoints.
///
/// Collects the explanation trail, the missing-input questions, and the
/// numeric score. Both lists are append-only; checkpoints never rewrite
/// earlier entries.
#[derive(Clone, Debug, Default)]
pub struct Trail {
    steps: Vec<String>,
    missing_info: Vec<String>,
    score: u32,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one explanation step.
    pub fn step(&mut self, message: impl Into<String>) {
        self.steps.push(message.into());
    }

    /// Append one missing-input question.
    pub fn missing(&mut self, message: impl Into<String>) {
        self.missing_info.push(message.into());
    }

    /// Add points to the accumulated risk score.
    pub fn add(&mut self, points: u32) {
        self.score += points;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn missing_info(&self) -> &[String] {
        &self.missing_info
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Vec<String>, u32) {
        (self.steps, self.missing_info, self.score)
    }
}
