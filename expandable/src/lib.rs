pub mod animation;
pub mod config;
pub mod controller;
pub mod event;
pub mod host;
pub mod layout;
pub mod registry;
pub mod state;
pub mod transitions;

pub use animation::{AnimationGroup, GroupId};
pub use config::{ExpansionConfig, DEFAULT_EVENT_CAPACITY};
pub use controller::{ExpansionController, ExpansionState};
pub use event::{Direction, ExpansionEvent};
pub use host::Host;
pub use layout::{Constraints, LayoutParams, Size, SizeSnapshot};
pub use registry::{ChildId, ChildRegistry, Participant};
pub use state::{SavedState, StateError};
pub use transitions::{Easing, ProgressMode, TransitionConfig};
