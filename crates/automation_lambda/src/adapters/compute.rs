pub trait InstanceController {
    fn start_instances(&self, instance_ids: &[String]) -> Result<(), String>;
    fn stop_instances(&self, instance_ids: &[String]) -> Result<(), String>;
}
