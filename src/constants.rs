/// Substring that identifies the birthday topic among the account's SNS topics
pub const BIRTHDAY_TOPIC_MARKER: &str = "birthdays";

/// AWS region used when `AWS_REGION` is not set
pub const DEFAULT_REGION: &str = "eu-west-1";

/// Contacts file used when `CONTACTS_FILE` is not set
pub const DEFAULT_CONTACTS_FILE: &str = "contacts.json";

/// Timezone used to decide "today" when `NOTIFIER_TIMEZONE` is not set
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Date format of the `dob` field in the contacts file
pub const DOB_FORMAT: &str = "%Y-%m-%d";

/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "birthday_notifier=info";
