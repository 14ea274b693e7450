//! ECS компоненты локомоции
//!
//! Организация по доменам:
//! - actor: маркеры (LocomotionActor, Player)
//! - input: per-tick snapshot ввода (InputSample)
//! - motion: интеграторы и контакты (MotionState, LocomotionState, GroundInfo)
//! - animation: animation sink (AnimationParameters)
//! - camera: reference frame камеры (CameraHeading)

pub mod actor;
pub mod animation;
pub mod camera;
pub mod input;
pub mod motion;

// Re-exports для удобного импорта
pub use actor::*;
pub use animation::*;
pub use camera::*;
pub use input::*;
pub use motion::*;
