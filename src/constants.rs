/// Current firmware version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Capacity of a formatted Realtime Database REST URL (host + path + auth token)
pub const URL_MAX_LEN: usize = 256;

/// ADXL345 accelerometer address (SDO pulled low)
pub const ADXL345_I2C_ADDRESS: u8 = 0x53;
/// MAX30102 pulse oximeter address (fixed)
pub const MAX30102_I2C_ADDRESS: u8 = 0x57;

/// NodeMCU ADC resolution (10 bits)
pub const NODEMCU_ADC_MAX_RAW: u16 = 1023;
/// ESP32 ADC resolution (12 bits)
pub const GENERIC_ADC_MAX_RAW: u16 = 4095;
