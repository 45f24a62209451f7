mod developer;
mod user;
