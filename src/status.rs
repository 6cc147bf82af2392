//! Device status and configuration value types.
//!
//! The controller encodes every property value as a short ASCII payload.
//! This module defines the closed value sets: operating modes, high-voltage
//! states, installed device kinds, and the bit-flag words reported by the
//! interlock and remote I/O commands.
//!
//! Enumerated values convert with `from_payload` / `to_payload`; flag words
//! decode from the ordinal of the single payload character and are tested
//! with [`InterlockStatus::contains`] and friends.

use crate::error::{MultiGaugeError, Result};
use crate::utils::flag_ordinal;

/// Operating mode of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteMode {
    /// Front-panel (local) control.
    Local,
    /// Remote I/O control.
    Remote,
    /// Serial-line control.
    Serial,
}

impl RemoteMode {
    /// Returns the wire payload code for this mode.
    pub const fn code(self) -> &'static str {
        match self {
            RemoteMode::Local => "0",
            RemoteMode::Remote => "1",
            RemoteMode::Serial => "2",
        }
    }

    /// Decodes a mode from a reply payload.
    ///
    /// # Errors
    ///
    /// Returns `MultiGaugeError::UnknownField` for codes outside the set.
    pub fn from_payload(data: &str) -> Result<Self> {
        match data {
            "0" => Ok(RemoteMode::Local),
            "1" => Ok(RemoteMode::Remote),
            "2" => Ok(RemoteMode::Serial),
            other => Err(MultiGaugeError::unknown_field("remote mode", other)),
        }
    }

    /// Encodes the mode as a write payload.
    pub fn to_payload(&self) -> String {
        self.code().to_owned()
    }
}

/// State of a high-voltage output.
///
/// `On` is a historical wire-alias of `OnStartStep` (both encode to `"1"`);
/// decoding `"1"` resolves to `OnStartStep`, the first-declared member.
/// Negative codes report why the output switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighVoltageStatus {
    /// Output off.
    Off,
    /// Output on, started in step mode.
    OnStartStep,
    /// Output on (alias of `OnStartStep` on the wire).
    On,
    /// Output on, started in fixed mode.
    OnStartFixed,
    /// Output on, protect function armed, step mode.
    OnProtectStep,
    /// Output on, protect function armed, fixed mode.
    OnProtectFixed,
    /// Off: front panel interlock.
    OffPanelInterlock,
    /// Off: remote I/O interlock.
    OffRemoteInterlock,
    /// Off: HV module overtemperature.
    OffOverTemperature,
    /// Off: remote I/O fault.
    OffRemoteFault,
    /// Off: protect function triggered.
    OffProtect,
    /// Off: short-circuit protection triggered.
    OffShortCircuit,
}

impl HighVoltageStatus {
    /// Returns the wire payload code for this state.
    pub const fn code(self) -> &'static str {
        match self {
            HighVoltageStatus::Off => "0",
            HighVoltageStatus::OnStartStep => "1",
            HighVoltageStatus::On => "1",
            HighVoltageStatus::OnStartFixed => "2",
            HighVoltageStatus::OnProtectStep => "3",
            HighVoltageStatus::OnProtectFixed => "4",
            HighVoltageStatus::OffPanelInterlock => "-3",
            HighVoltageStatus::OffRemoteInterlock => "-4",
            HighVoltageStatus::OffOverTemperature => "-8",
            HighVoltageStatus::OffRemoteFault => "-7",
            HighVoltageStatus::OffProtect => "-6",
            HighVoltageStatus::OffShortCircuit => "-5",
        }
    }

    /// Decodes a state from a reply payload.
    ///
    /// The aliased code `"1"` resolves to [`HighVoltageStatus::OnStartStep`].
    ///
    /// # Errors
    ///
    /// Returns `MultiGaugeError::UnknownField` for codes outside the set.
    pub fn from_payload(data: &str) -> Result<Self> {
        match data {
            "0" => Ok(HighVoltageStatus::Off),
            "1" => Ok(HighVoltageStatus::OnStartStep),
            "2" => Ok(HighVoltageStatus::OnStartFixed),
            "3" => Ok(HighVoltageStatus::OnProtectStep),
            "4" => Ok(HighVoltageStatus::OnProtectFixed),
            "-3" => Ok(HighVoltageStatus::OffPanelInterlock),
            "-4" => Ok(HighVoltageStatus::OffRemoteInterlock),
            "-5" => Ok(HighVoltageStatus::OffShortCircuit),
            "-6" => Ok(HighVoltageStatus::OffProtect),
            "-7" => Ok(HighVoltageStatus::OffRemoteFault),
            "-8" => Ok(HighVoltageStatus::OffOverTemperature),
            other => Err(MultiGaugeError::unknown_field("high-voltage status", other)),
        }
    }

    /// Encodes the state as a write payload.
    pub fn to_payload(&self) -> String {
        self.code().to_owned()
    }

    /// Returns whether the output is energized in this state.
    pub fn is_on(self) -> bool {
        matches!(
            self,
            HighVoltageStatus::OnStartStep
                | HighVoltageStatus::On
                | HighVoltageStatus::OnStartFixed
                | HighVoltageStatus::OnProtectStep
                | HighVoltageStatus::OnProtectFixed
        )
    }
}

/// Pressure unit the controller reports in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureUnit {
    /// Torr.
    Torr,
    /// Millibar.
    Mbar,
    /// Pascal.
    Pascal,
}

impl PressureUnit {
    /// Returns the wire payload code for this unit.
    pub const fn code(self) -> &'static str {
        match self {
            PressureUnit::Torr => "0",
            PressureUnit::Mbar => "1",
            PressureUnit::Pascal => "2",
        }
    }

    /// Decodes a unit from a reply payload.
    ///
    /// # Errors
    ///
    /// Returns `MultiGaugeError::UnknownField` for codes outside the set.
    pub fn from_payload(data: &str) -> Result<Self> {
        match data {
            "0" => Ok(PressureUnit::Torr),
            "1" => Ok(PressureUnit::Mbar),
            "2" => Ok(PressureUnit::Pascal),
            other => Err(MultiGaugeError::unknown_field("pressure unit", other)),
        }
    }

    /// Encodes the unit as a write payload.
    pub fn to_payload(&self) -> String {
        self.code().to_owned()
    }
}

/// High-voltage device model installed on an HV channel.
///
/// `ScTr20` is a wire-alias of `ScTr75_55_40` (both encode to `"4"`);
/// decoding `"4"` resolves to `ScTr75_55_40`, the first-declared member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HvDeviceNumber {
    /// No device installed.
    Spare,
    /// 500 l/s sputter-ion triode pump.
    ScTr500,
    /// 300 l/s sputter-ion triode pump.
    ScTr300,
    /// 150 l/s sputter-ion triode pump.
    ScTr150,
    /// 75/55/40 l/s sputter-ion triode pump.
    ScTr75_55_40,
    /// 20 l/s sputter-ion triode pump (alias of `ScTr75_55_40` on the wire).
    ScTr20,
    /// 500 l/s noble-diode pump.
    DiodeNd500,
    /// 300 l/s noble-diode pump.
    DiodeNd300,
    /// 150 l/s noble-diode pump.
    DiodeNd150,
    /// 75/55/40 l/s noble-diode pump.
    DiodeNd75_55_40,
    /// 20 l/s noble-diode pump.
    DiodeNd20,
}

impl HvDeviceNumber {
    /// Returns the wire payload code for this device.
    pub const fn code(self) -> &'static str {
        match self {
            HvDeviceNumber::Spare => "0",
            HvDeviceNumber::ScTr500 => "1",
            HvDeviceNumber::ScTr300 => "2",
            HvDeviceNumber::ScTr150 => "3",
            HvDeviceNumber::ScTr75_55_40 => "4",
            HvDeviceNumber::ScTr20 => "4",
            HvDeviceNumber::DiodeNd500 => "6",
            HvDeviceNumber::DiodeNd300 => "7",
            HvDeviceNumber::DiodeNd150 => "8",
            HvDeviceNumber::DiodeNd75_55_40 => "9",
            HvDeviceNumber::DiodeNd20 => ":",
        }
    }

    /// Decodes a device from a reply payload.
    ///
    /// The aliased code `"4"` resolves to [`HvDeviceNumber::ScTr75_55_40`].
    ///
    /// # Errors
    ///
    /// Returns `MultiGaugeError::UnknownField` for codes outside the set.
    pub fn from_payload(data: &str) -> Result<Self> {
        match data {
            "0" => Ok(HvDeviceNumber::Spare),
            "1" => Ok(HvDeviceNumber::ScTr500),
            "2" => Ok(HvDeviceNumber::ScTr300),
            "3" => Ok(HvDeviceNumber::ScTr150),
            "4" => Ok(HvDeviceNumber::ScTr75_55_40),
            "6" => Ok(HvDeviceNumber::DiodeNd500),
            "7" => Ok(HvDeviceNumber::DiodeNd300),
            "8" => Ok(HvDeviceNumber::DiodeNd150),
            "9" => Ok(HvDeviceNumber::DiodeNd75_55_40),
            ":" => Ok(HvDeviceNumber::DiodeNd20),
            other => Err(MultiGaugeError::unknown_field("HV device number", other)),
        }
    }

    /// Encodes the device as a write payload.
    pub fn to_payload(&self) -> String {
        self.code().to_owned()
    }
}

/// Gauge device model installed on a gauge channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeDeviceNumber {
    /// Convection gauge.
    Convector,
    /// Miniature Bayard-Alpert gauge.
    MiniBa,
    /// Cold cathode gauge.
    ColdCathode,
}

impl GaugeDeviceNumber {
    /// Returns the wire payload code for this device.
    pub const fn code(self) -> &'static str {
        match self {
            GaugeDeviceNumber::Convector => "0",
            GaugeDeviceNumber::MiniBa => "1",
            GaugeDeviceNumber::ColdCathode => "2",
        }
    }

    /// Decodes a device from a reply payload.
    ///
    /// # Errors
    ///
    /// Returns `MultiGaugeError::UnknownField` for codes outside the set.
    pub fn from_payload(data: &str) -> Result<Self> {
        match data {
            "0" => Ok(GaugeDeviceNumber::Convector),
            "1" => Ok(GaugeDeviceNumber::MiniBa),
            "2" => Ok(GaugeDeviceNumber::ColdCathode),
            other => Err(MultiGaugeError::unknown_field("gauge device number", other)),
        }
    }
}

/// Serial interface type of the serial channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialDeviceNumber {
    /// RS232 interface.
    Rs232,
    /// RS485 interface.
    Rs485,
}

impl SerialDeviceNumber {
    /// Returns the wire payload code for this interface.
    pub const fn code(self) -> &'static str {
        match self {
            SerialDeviceNumber::Rs232 => "0",
            SerialDeviceNumber::Rs485 => "1",
        }
    }

    /// Decodes an interface from a reply payload.
    ///
    /// # Errors
    ///
    /// Returns `MultiGaugeError::UnknownField` for codes outside the set.
    pub fn from_payload(data: &str) -> Result<Self> {
        match data {
            "0" => Ok(SerialDeviceNumber::Rs232),
            "1" => Ok(SerialDeviceNumber::Rs485),
            other => Err(MultiGaugeError::unknown_field("serial device number", other)),
        }
    }
}

/// Fixed/step operating mode of an HV channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedStep {
    /// Fixed mode.
    Fixed,
    /// Step mode.
    Step,
}

impl FixedStep {
    /// Returns the wire payload code for this mode.
    pub const fn code(self) -> &'static str {
        match self {
            FixedStep::Fixed => "0",
            FixedStep::Step => "1",
        }
    }

    /// Decodes a mode from a reply payload.
    ///
    /// # Errors
    ///
    /// Returns `MultiGaugeError::UnknownField` for codes outside the set.
    pub fn from_payload(data: &str) -> Result<Self> {
        match data {
            "0" => Ok(FixedStep::Fixed),
            "1" => Ok(FixedStep::Step),
            other => Err(MultiGaugeError::unknown_field("fixed/step mode", other)),
        }
    }

    /// Encodes the mode as a write payload.
    pub fn to_payload(&self) -> String {
        self.code().to_owned()
    }
}

/// Start/protect operating mode of an HV channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartProtect {
    /// Start mode.
    Start,
    /// Protect mode.
    Protect,
}

impl StartProtect {
    /// Returns the wire payload code for this mode.
    pub const fn code(self) -> &'static str {
        match self {
            StartProtect::Start => "0",
            StartProtect::Protect => "1",
        }
    }

    /// Decodes a mode from a reply payload.
    ///
    /// # Errors
    ///
    /// Returns `MultiGaugeError::UnknownField` for codes outside the set.
    pub fn from_payload(data: &str) -> Result<Self> {
        match data {
            "0" => Ok(StartProtect::Start),
            "1" => Ok(StartProtect::Protect),
            other => Err(MultiGaugeError::unknown_field("start/protect mode", other)),
        }
    }

    /// Encodes the mode as a write payload.
    pub fn to_payload(&self) -> String {
        self.code().to_owned()
    }
}

/// Output polarity of an HV channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Negative polarity.
    Negative,
    /// Positive polarity.
    Positive,
}

impl Polarity {
    /// Returns the wire payload code for this polarity.
    pub const fn code(self) -> &'static str {
        match self {
            Polarity::Negative => "0",
            Polarity::Positive => "1",
        }
    }

    /// Decodes a polarity from a reply payload.
    ///
    /// # Errors
    ///
    /// Returns `MultiGaugeError::UnknownField` for codes outside the set.
    pub fn from_payload(data: &str) -> Result<Self> {
        match data {
            "0" => Ok(Polarity::Negative),
            "1" => Ok(Polarity::Positive),
            other => Err(MultiGaugeError::unknown_field("polarity", other)),
        }
    }

    /// Encodes the polarity as a write payload.
    pub fn to_payload(&self) -> String {
        self.code().to_owned()
    }
}

/// Interlock status flag word.
///
/// Decoded from the ordinal of the single payload character of the
/// interlock-status command.
///
/// # Example
///
/// ```
/// use multigauge::InterlockStatus;
///
/// let status = InterlockStatus::from_payload("\u{84}").unwrap();
/// assert!(status.contains(InterlockStatus::HV1_REMOTE));
/// assert!(status.contains(InterlockStatus::HV2_CABLE));
/// assert!(!status.contains(InterlockStatus::FRONT_PANEL));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterlockStatus(u8);

impl InterlockStatus {
    /// Front panel interlock active.
    pub const FRONT_PANEL: Self = Self(0x02);
    /// HV1 remote I/O interlock active.
    pub const HV1_REMOTE: Self = Self(0x04);
    /// HV1 cable interlock active.
    pub const HV1_CABLE: Self = Self(0x08);
    /// HV2 remote I/O interlock active.
    pub const HV2_REMOTE: Self = Self(0x40);
    /// HV2 cable interlock active.
    pub const HV2_CABLE: Self = Self(0x80);

    /// Decodes the flag word from a reply payload.
    ///
    /// # Errors
    ///
    /// Returns `MultiGaugeError::InvalidPayload` unless the payload is a
    /// single character with ordinal ≤ 255.
    pub fn from_payload(data: &str) -> Result<Self> {
        flag_ordinal(data).map(Self)
    }

    /// Returns the raw flag bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns whether all flags in `other` are set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns whether no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for InterlockStatus {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Remote I/O output flag word of an HV channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteOutput(u8);

impl RemoteOutput {
    /// High voltage enabled.
    pub const HIGH_VOLTAGE_ENABLE: Self = Self(0x01);
    /// Set-point 2 active.
    pub const SET_POINT_2_ACTIVE: Self = Self(0x02);
    /// Set-point 1 active.
    pub const SET_POINT_1_ACTIVE: Self = Self(0x04);
    /// Interlock active.
    pub const INTERLOCK_ACTIVE: Self = Self(0x08);
    /// High voltage fault.
    pub const HIGH_VOLTAGE_FAULT: Self = Self(0x10);
    /// Serial mode selected.
    pub const SERIAL_MODE: Self = Self(0x20);
    /// Protect mode selected.
    pub const PROTECT_MODE: Self = Self(0x40);

    /// Decodes the flag word from a reply payload.
    ///
    /// # Errors
    ///
    /// Returns `MultiGaugeError::InvalidPayload` unless the payload is a
    /// single character with ordinal ≤ 255.
    pub fn from_payload(data: &str) -> Result<Self> {
        flag_ordinal(data).map(Self)
    }

    /// Returns the raw flag bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns whether all flags in `other` are set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns whether no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for RemoteOutput {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Remote I/O input flag word of an HV channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteInput(u8);

impl RemoteInput {
    /// Step mode selected.
    pub const STEP_MODE: Self = Self(0x04);
    /// Remote mode selected.
    pub const REMOTE_MODE: Self = Self(0x08);
    /// Protect mode selected.
    pub const PROTECT_MODE: Self = Self(0x10);
    /// HV output enable asserted.
    pub const HV_OUTPUT_ENABLE: Self = Self(0x20);
    /// HV confirm asserted.
    pub const HV_CONFIRM: Self = Self(0x40);
    /// Remote interlock asserted.
    pub const REMOTE_INTERLOCK: Self = Self(0x80);

    /// Decodes the flag word from a reply payload.
    ///
    /// # Errors
    ///
    /// Returns `MultiGaugeError::InvalidPayload` unless the payload is a
    /// single character with ordinal ≤ 255.
    pub fn from_payload(data: &str) -> Result<Self> {
        flag_ordinal(data).map(Self)
    }

    /// Returns the raw flag bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns whether all flags in `other` are set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns whether no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for RemoteInput {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_mode() {
        assert_eq!(RemoteMode::from_payload("0").unwrap(), RemoteMode::Local);
        assert_eq!(RemoteMode::from_payload("1").unwrap(), RemoteMode::Remote);
        assert_eq!(RemoteMode::from_payload("2").unwrap(), RemoteMode::Serial);
        assert_eq!(RemoteMode::Remote.to_payload(), "1");
        assert!(RemoteMode::from_payload("3").is_err());
    }

    #[test]
    fn test_high_voltage_status_alias_resolution() {
        // "1" is shared by OnStartStep and On; the first-declared member wins
        assert_eq!(
            HighVoltageStatus::from_payload("1").unwrap(),
            HighVoltageStatus::OnStartStep
        );
        assert_eq!(HighVoltageStatus::On.code(), "1");
        assert_eq!(HighVoltageStatus::OnStartStep.code(), "1");
    }

    #[test]
    fn test_high_voltage_status_off_codes() {
        assert_eq!(
            HighVoltageStatus::from_payload("-5").unwrap(),
            HighVoltageStatus::OffShortCircuit
        );
        assert_eq!(
            HighVoltageStatus::from_payload("-8").unwrap(),
            HighVoltageStatus::OffOverTemperature
        );
        assert_eq!(HighVoltageStatus::OffPanelInterlock.code(), "-3");
        assert!(HighVoltageStatus::from_payload("-9").is_err());
    }

    #[test]
    fn test_high_voltage_status_is_on() {
        assert!(!HighVoltageStatus::Off.is_on());
        assert!(!HighVoltageStatus::OffProtect.is_on());
        assert!(HighVoltageStatus::On.is_on());
        assert!(HighVoltageStatus::OnProtectFixed.is_on());
    }

    #[test]
    fn test_pressure_unit() {
        assert_eq!(PressureUnit::from_payload("1").unwrap(), PressureUnit::Mbar);
        assert_eq!(PressureUnit::Pascal.to_payload(), "2");
        assert!(PressureUnit::from_payload("torr").is_err());
    }

    #[test]
    fn test_hv_device_number_alias_resolution() {
        // "4" is shared by ScTr75_55_40 and ScTr20; the first-declared wins
        assert_eq!(
            HvDeviceNumber::from_payload("4").unwrap(),
            HvDeviceNumber::ScTr75_55_40
        );
        assert_eq!(HvDeviceNumber::ScTr20.code(), "4");
        // ":" continues the sequence past "9"
        assert_eq!(
            HvDeviceNumber::from_payload(":").unwrap(),
            HvDeviceNumber::DiodeNd20
        );
        assert!(HvDeviceNumber::from_payload("5").is_err());
    }

    #[test]
    fn test_gauge_and_serial_device_numbers() {
        assert_eq!(
            GaugeDeviceNumber::from_payload("2").unwrap(),
            GaugeDeviceNumber::ColdCathode
        );
        assert_eq!(
            SerialDeviceNumber::from_payload("1").unwrap(),
            SerialDeviceNumber::Rs485
        );
        assert!(GaugeDeviceNumber::from_payload("3").is_err());
        assert!(SerialDeviceNumber::from_payload("2").is_err());
    }

    #[test]
    fn test_two_state_modes() {
        assert_eq!(FixedStep::from_payload("0").unwrap(), FixedStep::Fixed);
        assert_eq!(FixedStep::Step.to_payload(), "1");
        assert_eq!(StartProtect::from_payload("1").unwrap(), StartProtect::Protect);
        assert_eq!(Polarity::from_payload("1").unwrap(), Polarity::Positive);
        assert_eq!(Polarity::Negative.to_payload(), "0");
    }

    #[test]
    fn test_interlock_status_flags() {
        let clear = InterlockStatus::from_payload("\u{0}").unwrap();
        assert!(clear.is_empty());

        let status = InterlockStatus::from_payload("\u{80}").unwrap();
        assert_eq!(status, InterlockStatus::HV2_CABLE);
        assert!(status.contains(InterlockStatus::HV2_CABLE));
        assert!(!status.contains(InterlockStatus::HV1_CABLE));
    }

    #[test]
    fn test_interlock_status_combined() {
        let both = InterlockStatus::FRONT_PANEL | InterlockStatus::HV1_REMOTE;
        assert_eq!(both.bits(), 0x06);
        let decoded = InterlockStatus::from_payload("\u{6}").unwrap();
        assert_eq!(decoded, both);
    }

    #[test]
    fn test_remote_output_flags() {
        let flags = RemoteOutput::from_payload("\u{21}").unwrap();
        assert!(flags.contains(RemoteOutput::HIGH_VOLTAGE_ENABLE));
        assert!(flags.contains(RemoteOutput::SERIAL_MODE));
        assert!(!flags.contains(RemoteOutput::PROTECT_MODE));
    }

    #[test]
    fn test_remote_input_flags() {
        let flags = RemoteInput::from_payload("\u{8c}").unwrap();
        assert!(flags.contains(RemoteInput::STEP_MODE));
        assert!(flags.contains(RemoteInput::REMOTE_MODE));
        assert!(flags.contains(RemoteInput::REMOTE_INTERLOCK));
        assert!(!flags.contains(RemoteInput::HV_CONFIRM));
    }

    #[test]
    fn test_flag_word_rejects_bad_payloads() {
        assert!(InterlockStatus::from_payload("").is_err());
        assert!(InterlockStatus::from_payload("ab").is_err());
        assert!(RemoteOutput::from_payload("\u{100}").is_err());
    }
}
