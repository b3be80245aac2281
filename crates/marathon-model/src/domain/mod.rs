mod constraint;
pub use constraint::Constraint;

mod deployment_info;
pub use deployment_info::DeploymentInfo;

mod delay;
pub use delay::Delay;

mod app;
pub use app::App;

mod queue;
pub use queue::Queue;

/// Marathon application identifier (e.g. `"/prod/web"`).
pub type AppId = String;
