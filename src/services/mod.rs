/// Business logic services
pub mod birthday_service;
pub mod notification_service;
