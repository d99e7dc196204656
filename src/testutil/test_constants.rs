/// This address should be used as the sender of every test message
pub const DEFAULT_SENDER_ADDRESS: &str = "tp1dv7562fvlvf74904t222ze362m036ugtmg45ll";
/// This is the default value that test_instantiate uses for the contract name
pub const DEFAULT_CONTRACT_NAME: &str = "salmon-supply-chain";
/// The default salmon matches the first sample record seeded by initLedger
pub const DEFAULT_SALMON_ID: &str = "1";
pub const DEFAULT_SALMON_VESSEL: &str = "Vessel #1";
pub const DEFAULT_SALMON_DATETIME: &str = "2014-01-01";
pub const DEFAULT_SALMON_LOCATION: &str = "Viet Nam";
pub const DEFAULT_SALMON_HOLDER: &str = "Nha Hoang";
