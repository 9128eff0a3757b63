use core::fmt;
use core::str::FromStr;

use crate::constants::{GENERIC_ADC_MAX_RAW, NODEMCU_ADC_MAX_RAW};

/// Supported hardware targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Board {
    /// GPIO-numbered devkit (ESP32 numbering, Arduino framework)
    Generic,
    /// ESP8266 NodeMCU using the Dxx silkscreen labels
    NodeMcu,
}

/// Pin identifier as written for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pin {
    Gpio(u8),
    NodeMcu(NodeMcuPin),
}

/// What a pin identifier resolves to on the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicalPin {
    Gpio(u8),
    /// The ESP8266's single ADC input
    Adc,
}

/// NodeMCU silkscreen labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeMcuPin {
    D0,
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
    A0,
}

/// Logical roles a pin can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Dht,
    Ldr,
    Led,
    Buzzer,
    I2cSda,
    I2cScl,
}

/// Pin assignment for every role on one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinMap {
    pub dht: Pin,
    pub ldr: Pin,
    pub led: Pin,
    pub buzzer: Pin,
    /// Fixed by the board's `Wire` defaults
    pub i2c_sda: Pin,
    /// Fixed by the board's `Wire` defaults
    pub i2c_scl: Pin,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// Pin identifier does not exist on the board
    InvalidPin { role: Role, pin: Pin },
    /// Role needs a digital output but the pin is input-only or analog
    NotOutputCapable { role: Role, pin: Pin },
    /// Role needs an analog input but the pin has no ADC channel
    NotAdcCapable { role: Role, pin: Pin },
    /// Two roles resolve to the same physical pin
    DuplicatePin { first: Role, second: Role },
    /// Label text is not one of D0-D8 or A0
    UnknownLabel,
    /// Board name is not one of generic/esp32 or nodemcu/esp8266
    UnknownBoard,
}

impl Board {
    pub const ALL: [Board; 2] = [Board::Generic, Board::NodeMcu];

    pub const fn name(self) -> &'static str {
        match self {
            Board::Generic => "generic",
            Board::NodeMcu => "nodemcu",
        }
    }

    /// Default pin map for the board.
    pub const fn pins(self) -> PinMap {
        match self {
            Board::Generic => PinMap {
                dht: Pin::Gpio(4),
                ldr: Pin::Gpio(34),
                led: Pin::Gpio(2),
                buzzer: Pin::Gpio(5),
                i2c_sda: Pin::Gpio(21),
                i2c_scl: Pin::Gpio(22),
            },
            Board::NodeMcu => PinMap {
                dht: Pin::NodeMcu(NodeMcuPin::D4),
                ldr: Pin::NodeMcu(NodeMcuPin::A0),
                led: Pin::NodeMcu(NodeMcuPin::D3),
                buzzer: Pin::NodeMcu(NodeMcuPin::D8),
                i2c_sda: Pin::NodeMcu(NodeMcuPin::D2),
                i2c_scl: Pin::NodeMcu(NodeMcuPin::D1),
            },
        }
    }

    /// Highest raw reading of the board's ADC, used to scale the LDR.
    pub const fn adc_max_raw(self) -> u16 {
        match self {
            Board::Generic => GENERIC_ADC_MAX_RAW,
            // A0 saturates at 1V
            Board::NodeMcu => NODEMCU_ADC_MAX_RAW,
        }
    }

    /// Whether the identifier names a pin that exists on this board.
    pub fn has_pin(self, pin: Pin) -> bool {
        match (self, pin) {
            // GPIO 20, 24 and 28-31 are not bonded out on the ESP32
            (Board::Generic, Pin::Gpio(n)) => n <= 39 && !matches!(n, 20 | 24 | 28..=31),
            (Board::Generic, Pin::NodeMcu(_)) => false,
            (Board::NodeMcu, Pin::Gpio(n)) => NodeMcuPin::from_gpio(n).is_some(),
            (Board::NodeMcu, Pin::NodeMcu(_)) => true,
        }
    }

    pub fn is_output_capable(self, pin: Pin) -> bool {
        if !self.has_pin(pin) {
            return false;
        }
        match pin.physical() {
            // 34-39 are input-only
            PhysicalPin::Gpio(n) => !(self == Board::Generic && n >= 34),
            PhysicalPin::Adc => false,
        }
    }

    pub fn is_adc_capable(self, pin: Pin) -> bool {
        if !self.has_pin(pin) {
            return false;
        }
        match (self, pin.physical()) {
            (Board::Generic, PhysicalPin::Gpio(n)) => {
                matches!(n, 0 | 2 | 4 | 12..=15 | 25..=27 | 32..=39)
            }
            (Board::NodeMcu, PhysicalPin::Gpio(_)) => false,
            (_, PhysicalPin::Adc) => true,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match crate::names::board_name(s) {
            Some("generic") => Ok(Board::Generic),
            Some("nodemcu") => Ok(Board::NodeMcu),
            _ => Err(Error::UnknownBoard),
        }
    }
}

impl Pin {
    pub const fn physical(self) -> PhysicalPin {
        match self {
            Pin::Gpio(n) => PhysicalPin::Gpio(n),
            Pin::NodeMcu(label) => match label.gpio() {
                Some(n) => PhysicalPin::Gpio(n),
                None => PhysicalPin::Adc,
            },
        }
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pin::Gpio(n) => write!(f, "GPIO{}", n),
            Pin::NodeMcu(label) => match label.gpio() {
                Some(n) => write!(f, "{} (GPIO{})", label, n),
                None => write!(f, "{} (ADC)", label),
            },
        }
    }
}

impl NodeMcuPin {
    pub const ALL: [NodeMcuPin; 10] = [
        NodeMcuPin::D0,
        NodeMcuPin::D1,
        NodeMcuPin::D2,
        NodeMcuPin::D3,
        NodeMcuPin::D4,
        NodeMcuPin::D5,
        NodeMcuPin::D6,
        NodeMcuPin::D7,
        NodeMcuPin::D8,
        NodeMcuPin::A0,
    ];

    /// GPIO number behind the label, `None` for the analog input.
    pub const fn gpio(self) -> Option<u8> {
        match self {
            NodeMcuPin::D0 => Some(16),
            NodeMcuPin::D1 => Some(5),
            NodeMcuPin::D2 => Some(4),
            NodeMcuPin::D3 => Some(0),
            NodeMcuPin::D4 => Some(2),
            NodeMcuPin::D5 => Some(14),
            NodeMcuPin::D6 => Some(12),
            NodeMcuPin::D7 => Some(13),
            NodeMcuPin::D8 => Some(15),
            NodeMcuPin::A0 => None,
        }
    }

    pub fn from_gpio(gpio: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.gpio() == Some(gpio))
    }

    pub const fn label(self) -> &'static str {
        match self {
            NodeMcuPin::D0 => "D0",
            NodeMcuPin::D1 => "D1",
            NodeMcuPin::D2 => "D2",
            NodeMcuPin::D3 => "D3",
            NodeMcuPin::D4 => "D4",
            NodeMcuPin::D5 => "D5",
            NodeMcuPin::D6 => "D6",
            NodeMcuPin::D7 => "D7",
            NodeMcuPin::D8 => "D8",
            NodeMcuPin::A0 => "A0",
        }
    }

    /// Board-level function of the pin, as printed in the NodeMCU pinout.
    pub const fn function(self) -> &'static str {
        match self {
            NodeMcuPin::D0 => "Wake from deep sleep",
            NodeMcuPin::D1 => "SCL (I2C)",
            NodeMcuPin::D2 => "SDA (I2C)",
            NodeMcuPin::D3 => "Flash (integrated LED)",
            NodeMcuPin::D4 => "Built-in LED",
            NodeMcuPin::D5 => "SPI CLK",
            NodeMcuPin::D6 => "SPI MISO",
            NodeMcuPin::D7 => "SPI MOSI",
            NodeMcuPin::D8 => "SPI CS",
            NodeMcuPin::A0 => "Analog input (0-1V max)",
        }
    }
}

impl fmt::Display for NodeMcuPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NodeMcuPin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|label| label.label().eq_ignore_ascii_case(s))
            .ok_or(Error::UnknownLabel)
    }
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Dht,
        Role::Ldr,
        Role::Led,
        Role::Buzzer,
        Role::I2cSda,
        Role::I2cScl,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Role::Dht => "dht",
            Role::Ldr => "ldr",
            Role::Led => "led",
            Role::Buzzer => "buzzer",
            Role::I2cSda => "i2c_sda",
            Role::I2cScl => "i2c_scl",
        }
    }
}

impl PinMap {
    pub const fn get(&self, role: Role) -> Pin {
        match role {
            Role::Dht => self.dht,
            Role::Ldr => self.ldr,
            Role::Led => self.led,
            Role::Buzzer => self.buzzer,
            Role::I2cSda => self.i2c_sda,
            Role::I2cScl => self.i2c_scl,
        }
    }

    /// Check every role's pin against the board, then check that no two roles
    /// share a physical pin.
    pub fn validate(&self, board: Board) -> Result<(), Error> {
        for role in Role::ALL {
            let pin = self.get(role);
            if !board.has_pin(pin) {
                return Err(Error::InvalidPin { role, pin });
            }
            match role {
                Role::Ldr => {
                    if !board.is_adc_capable(pin) {
                        return Err(Error::NotAdcCapable { role, pin });
                    }
                }
                // the DHT data line is driven low to start a read
                _ => {
                    if !board.is_output_capable(pin) {
                        return Err(Error::NotOutputCapable { role, pin });
                    }
                }
            }
        }

        for (i, first) in Role::ALL.iter().enumerate() {
            for second in &Role::ALL[i + 1..] {
                if self.get(*first).physical() == self.get(*second).physical() {
                    return Err(Error::DuplicatePin {
                        first: *first,
                        second: *second,
                    });
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPin { role, pin } => {
                write!(f, "{} pin {} does not exist on this board", role.name(), pin)
            }
            Error::NotOutputCapable { role, pin } => {
                write!(f, "{} pin {} cannot drive an output", role.name(), pin)
            }
            Error::NotAdcCapable { role, pin } => {
                write!(f, "{} pin {} has no ADC channel", role.name(), pin)
            }
            Error::DuplicatePin { first, second } => write!(
                f,
                "{} and {} share the same physical pin",
                first.name(),
                second.name()
            ),
            Error::UnknownLabel => f.write_str("unknown NodeMCU pin label"),
            Error::UnknownBoard => f.write_str("unknown board name"),
        }
    }
}
