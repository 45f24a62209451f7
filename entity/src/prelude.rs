pub use super::developer_account::Entity as DeveloperAccount;
pub use super::user::Entity as User;
