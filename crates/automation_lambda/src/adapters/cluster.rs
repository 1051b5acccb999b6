#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRequest {
    pub cluster_id: String,
    pub step_name: String,
    pub jar: String,
}

pub trait StepSubmitter {
    /// Returns the step ids the cluster assigned.
    fn submit_step(&self, request: &StepRequest) -> Result<Vec<String>, String>;
}
