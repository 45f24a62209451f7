pub mod avatar;
pub mod avatar_editor;
pub mod header;
pub mod layout;
pub mod markdown;
pub mod modal;
pub mod page;
pub mod protected_layout;
pub mod status_banner;

pub use avatar::UserAvatar;
pub use avatar_editor::AvatarEditor;
pub use header::Header;
pub use layout::Layout;
pub use markdown::Markdown;
pub use modal::{ConfirmationModal, FullScreenModal, Modal};
pub use page::Page;
pub use protected_layout::{ProtectedLayout, RequiresDeveloper, RequiresLoggedIn};
pub use status_banner::{Banner, StatusBanner};
