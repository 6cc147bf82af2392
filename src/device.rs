//! Varian Dual controller model.
//!
//! [`VarianDual`] is the top-level device facade: it owns the one shared
//! transport connection and exposes the controller's global properties plus
//! one proxy object per logical channel. Channel proxies ([`HvChannel`],
//! [`GaugeChannel`], [`SerialChannel`]) are created on first access and
//! cached for the lifetime of the facade, so holding on to `device.hv1()`
//! always observes the same object.
//!
//! Every property accessor performs one blocking protocol exchange; nothing
//! is cached between calls. The model is strictly single-threaded — the
//! facade is not `Sync` and the transport is a single ordered resource with
//! one outstanding request at a time.
//!
//! # Example
//!
//! ```no_run
//! use multigauge::{PressureUnit, RemoteMode, TcpTransport, VarianDual};
//!
//! let transport = TcpTransport::with_default_timeout(
//!     "192.168.1.50:10001".parse().unwrap(),
//! )?;
//! let device = VarianDual::new(transport);
//!
//! // Global properties
//! device.set_remote(RemoteMode::Serial)?;
//! device.set_unit(PressureUnit::Mbar)?;
//! println!("firmware: {}", device.ctrl_firmware_version()?);
//!
//! // Channel-scoped properties
//! let hv1 = device.hv1();
//! println!("hv1 state: {:?}", hv1.high_voltage()?);
//! println!("hv1 pressure: {:e}", hv1.pressure()?);
//! # Ok::<(), multigauge::MultiGaugeError>(())
//! ```

use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

use crate::attribute::Attribute;
use crate::channel::Channel;
use crate::command::Command;
use crate::error::Result;
use crate::status::{
    FixedStep, GaugeDeviceNumber, HighVoltageStatus, HvDeviceNumber, InterlockStatus, Polarity,
    PressureUnit, RemoteInput, RemoteMode, RemoteOutput, SerialDeviceNumber, StartProtect,
};
use crate::transport::Transport;
use crate::utils::{
    format_float, format_int, format_on_off, parse_float, parse_int, parse_on_off, parse_text,
};

type SharedTransport = Rc<RefCell<dyn Transport>>;

// Global (channel-less) attributes.
const REMOTE: Attribute<RemoteMode> =
    Attribute::new(Command::Remote, RemoteMode::from_payload, RemoteMode::to_payload);
const UNIT: Attribute<PressureUnit> =
    Attribute::new(Command::Unit, PressureUnit::from_payload, PressureUnit::to_payload);
const ERROR_STATUS: Attribute<String> = Attribute::read_only(Command::ErrorStatus, parse_text);
const INTERLOCK_STATUS: Attribute<InterlockStatus> =
    Attribute::read_only(Command::InterlockStatus, InterlockStatus::from_payload);
const CTRL_FIRMWARE_VERSION: Attribute<String> =
    Attribute::read_only(Command::MicroControllerFirmwareVersion, parse_text);
const DSP_FIRMWARE_VERSION: Attribute<String> =
    Attribute::read_only(Command::DspFirmwareVersion, parse_text);
const SERIAL_CONFIG: Attribute<bool> =
    Attribute::new(Command::SerialConfig, parse_on_off, format_on_off);

// Attributes shared by every channel proxy.
const DEVICE_TYPE: Attribute<String> = Attribute::read_only(Command::DeviceType, parse_text);

// High-voltage channel attributes.
const HV_DEVICE_NUMBER: Attribute<HvDeviceNumber> = Attribute::new(
    Command::DeviceNumber,
    HvDeviceNumber::from_payload,
    HvDeviceNumber::to_payload,
);
const HIGH_VOLTAGE: Attribute<HighVoltageStatus> = Attribute::new(
    Command::HighVoltage,
    HighVoltageStatus::from_payload,
    HighVoltageStatus::to_payload,
);
const VOLTAGE: Attribute<i32> = Attribute::read_only(Command::Voltage, parse_int);
const CURRENT: Attribute<f64> = Attribute::read_only(Command::Current, parse_float);
const PRESSURE: Attribute<f64> = Attribute::read_only(Command::Pressure, parse_float);
const FIXED_STEP: Attribute<FixedStep> =
    Attribute::new(Command::FixedStep, FixedStep::from_payload, FixedStep::to_payload);
const START_PROTECT: Attribute<StartProtect> = Attribute::new(
    Command::StartProtect,
    StartProtect::from_payload,
    StartProtect::to_payload,
);
const POLARITY: Attribute<Polarity> =
    Attribute::new(Command::Polarity, Polarity::from_payload, Polarity::to_payload);
const VOLTAGE_MAX: Attribute<i32> = Attribute::new(Command::VoltageMax, parse_int, format_int);
const CURRENT_MAX: Attribute<i32> = Attribute::new(Command::CurrentMax, parse_int, format_int);
const POWER_MAX: Attribute<i32> = Attribute::new(Command::PowerMax, parse_int, format_int);
const CURRENT_PROTECT: Attribute<i32> =
    Attribute::new(Command::CurrentProtect, parse_int, format_int);
const VOLTAGE_STEP1: Attribute<i32> = Attribute::new(Command::VoltageStep1, parse_int, format_int);
const CURRENT_STEP1: Attribute<f64> =
    Attribute::new(Command::CurrentStep1, parse_float, format_float);
const VOLTAGE_STEP2: Attribute<i32> = Attribute::new(Command::VoltageStep2, parse_int, format_int);
const CURRENT_STEP2: Attribute<f64> =
    Attribute::new(Command::CurrentStep2, parse_float, format_float);
const SET_POINT1: Attribute<f64> = Attribute::new(Command::SetPoint1, parse_float, format_float);
const SET_POINT2: Attribute<f64> = Attribute::new(Command::SetPoint2, parse_float, format_float);
const REMOTE_OUTPUT: Attribute<RemoteOutput> =
    Attribute::read_only(Command::RemoteOutput, RemoteOutput::from_payload);
const REMOTE_INPUT: Attribute<RemoteInput> =
    Attribute::read_only(Command::RemoteInput, RemoteInput::from_payload);

// Gauge and serial channel attributes.
const GAUGE_DEVICE_NUMBER: Attribute<GaugeDeviceNumber> =
    Attribute::read_only(Command::DeviceNumber, GaugeDeviceNumber::from_payload);
const SERIAL_DEVICE_NUMBER: Attribute<SerialDeviceNumber> =
    Attribute::read_only(Command::DeviceNumber, SerialDeviceNumber::from_payload);

/// Varian Dual vacuum-gauge / high-voltage controller.
///
/// Composes the global controller attributes with the per-channel proxies
/// for both high-voltage outputs, both gauge inputs and the serial port
/// unit, all sharing one transport connection.
pub struct VarianDual {
    conn: SharedTransport,
    hv1: OnceCell<HvChannel>,
    hv2: OnceCell<HvChannel>,
    gauge1: OnceCell<GaugeChannel>,
    gauge2: OnceCell<GaugeChannel>,
    serial: OnceCell<SerialChannel>,
}

impl VarianDual {
    /// Creates a device model over the given transport.
    ///
    /// The transport is the single shared connection for the facade and all
    /// of its channel proxies.
    // TODO: offer an opt-in setup exchange (ACK reply mode, mbar units) on
    // connect; the controller powers up in its front-panel configuration.
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            conn: Rc::new(RefCell::new(transport)),
            hv1: OnceCell::new(),
            hv2: OnceCell::new(),
            gauge1: OnceCell::new(),
            gauge2: OnceCell::new(),
            serial: OnceCell::new(),
        }
    }

    /// Queries the operating mode.
    pub fn remote(&self) -> Result<RemoteMode> {
        REMOTE.read(&mut *self.conn.borrow_mut(), Channel::NoChannel)
    }

    /// Sets the operating mode.
    pub fn set_remote(&self, mode: RemoteMode) -> Result<()> {
        REMOTE.write(&mut *self.conn.borrow_mut(), Channel::NoChannel, &mode)
    }

    /// Queries the pressure unit.
    pub fn unit(&self) -> Result<PressureUnit> {
        UNIT.read(&mut *self.conn.borrow_mut(), Channel::NoChannel)
    }

    /// Sets the pressure unit.
    pub fn set_unit(&self, unit: PressureUnit) -> Result<()> {
        UNIT.write(&mut *self.conn.borrow_mut(), Channel::NoChannel, &unit)
    }

    /// Queries the controller error status code.
    ///
    /// The raw code is returned; see
    /// [`system_error_description`](crate::system_error_description) for the
    /// meaning of the global `SW` code space.
    pub fn error_status(&self) -> Result<String> {
        ERROR_STATUS.read(&mut *self.conn.borrow_mut(), Channel::NoChannel)
    }

    /// Queries the interlock status flags.
    pub fn interlock_status(&self) -> Result<InterlockStatus> {
        INTERLOCK_STATUS.read(&mut *self.conn.borrow_mut(), Channel::NoChannel)
    }

    /// Queries the microcontroller firmware version string.
    pub fn ctrl_firmware_version(&self) -> Result<String> {
        CTRL_FIRMWARE_VERSION.read(&mut *self.conn.borrow_mut(), Channel::NoChannel)
    }

    /// Queries the DSP firmware version string.
    pub fn dsp_firmware_version(&self) -> Result<String> {
        DSP_FIRMWARE_VERSION.read(&mut *self.conn.borrow_mut(), Channel::NoChannel)
    }

    /// Queries whether serial configuration mode is enabled.
    pub fn serial_config(&self) -> Result<bool> {
        SERIAL_CONFIG.read(&mut *self.conn.borrow_mut(), Channel::NoChannel)
    }

    /// Enables or disables serial configuration mode.
    pub fn set_serial_config(&self, enabled: bool) -> Result<()> {
        SERIAL_CONFIG.write(&mut *self.conn.borrow_mut(), Channel::NoChannel, &enabled)
    }

    /// Returns the first high-voltage channel proxy.
    pub fn hv1(&self) -> &HvChannel {
        self.hv1
            .get_or_init(|| HvChannel::new(Rc::clone(&self.conn), Channel::HighVoltage1))
    }

    /// Returns the second high-voltage channel proxy.
    pub fn hv2(&self) -> &HvChannel {
        self.hv2
            .get_or_init(|| HvChannel::new(Rc::clone(&self.conn), Channel::HighVoltage2))
    }

    /// Returns the first gauge channel proxy.
    pub fn gauge1(&self) -> &GaugeChannel {
        self.gauge1
            .get_or_init(|| GaugeChannel::new(Rc::clone(&self.conn), Channel::Gauge1))
    }

    /// Returns the second gauge channel proxy.
    pub fn gauge2(&self) -> &GaugeChannel {
        self.gauge2
            .get_or_init(|| GaugeChannel::new(Rc::clone(&self.conn), Channel::Gauge2))
    }

    /// Returns the serial port channel proxy.
    pub fn serial(&self) -> &SerialChannel {
        self.serial
            .get_or_init(|| SerialChannel::new(Rc::clone(&self.conn), Channel::Serial))
    }
}

/// High-voltage channel view.
///
/// A thin proxy over the facade's shared connection: it owns no transport
/// state, only its channel identifier.
pub struct HvChannel {
    conn: SharedTransport,
    channel: Channel,
}

impl HvChannel {
    fn new(conn: SharedTransport, channel: Channel) -> Self {
        Self { conn, channel }
    }

    /// Returns the channel this proxy addresses.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Queries the device type identification.
    pub fn device_type(&self) -> Result<String> {
        DEVICE_TYPE.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Queries the channel error status code.
    ///
    /// The raw code is returned; see
    /// [`hv_error_description`](crate::hv_error_description) for the `HV`
    /// code space.
    pub fn error_status(&self) -> Result<String> {
        ERROR_STATUS.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Queries the installed pump model.
    pub fn device_number(&self) -> Result<HvDeviceNumber> {
        HV_DEVICE_NUMBER.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Sets the installed pump model.
    pub fn set_device_number(&self, device: HvDeviceNumber) -> Result<()> {
        HV_DEVICE_NUMBER.write(&mut *self.conn.borrow_mut(), self.channel, &device)
    }

    /// Queries the high-voltage output state.
    pub fn high_voltage(&self) -> Result<HighVoltageStatus> {
        HIGH_VOLTAGE.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Switches the high-voltage output.
    pub fn set_high_voltage(&self, status: HighVoltageStatus) -> Result<()> {
        HIGH_VOLTAGE.write(&mut *self.conn.borrow_mut(), self.channel, &status)
    }

    /// Queries the output voltage in volts.
    pub fn voltage(&self) -> Result<i32> {
        VOLTAGE.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Queries the output current in amperes.
    pub fn current(&self) -> Result<f64> {
        CURRENT.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Queries the pressure reading.
    pub fn pressure(&self) -> Result<f64> {
        PRESSURE.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Queries the fixed/step operating mode.
    pub fn fixed_step(&self) -> Result<FixedStep> {
        FIXED_STEP.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Sets the fixed/step operating mode.
    pub fn set_fixed_step(&self, mode: FixedStep) -> Result<()> {
        FIXED_STEP.write(&mut *self.conn.borrow_mut(), self.channel, &mode)
    }

    /// Queries the start/protect operating mode.
    pub fn start_protect(&self) -> Result<StartProtect> {
        START_PROTECT.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Sets the start/protect operating mode.
    pub fn set_start_protect(&self, mode: StartProtect) -> Result<()> {
        START_PROTECT.write(&mut *self.conn.borrow_mut(), self.channel, &mode)
    }

    /// Queries the output polarity.
    pub fn polarity(&self) -> Result<Polarity> {
        POLARITY.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Sets the output polarity.
    pub fn set_polarity(&self, polarity: Polarity) -> Result<()> {
        POLARITY.write(&mut *self.conn.borrow_mut(), self.channel, &polarity)
    }

    /// Queries the maximum voltage limit in volts (3000–7000, step 100).
    pub fn voltage_max(&self) -> Result<i32> {
        VOLTAGE_MAX.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Sets the maximum voltage limit in volts.
    pub fn set_voltage_max(&self, volts: i32) -> Result<()> {
        VOLTAGE_MAX.write(&mut *self.conn.borrow_mut(), self.channel, &volts)
    }

    /// Queries the maximum current limit in milliamperes (100–400, step 10).
    pub fn current_max(&self) -> Result<i32> {
        CURRENT_MAX.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Sets the maximum current limit in milliamperes.
    pub fn set_current_max(&self, milliamps: i32) -> Result<()> {
        CURRENT_MAX.write(&mut *self.conn.borrow_mut(), self.channel, &milliamps)
    }

    /// Queries the maximum power limit in watts (100–400, step 10).
    pub fn power_max(&self) -> Result<i32> {
        POWER_MAX.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Sets the maximum power limit in watts.
    pub fn set_power_max(&self, watts: i32) -> Result<()> {
        POWER_MAX.write(&mut *self.conn.borrow_mut(), self.channel, &watts)
    }

    /// Queries the protect-mode current threshold in milliamperes
    /// (10–100, step 10).
    pub fn current_protect(&self) -> Result<i32> {
        CURRENT_PROTECT.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Sets the protect-mode current threshold in milliamperes.
    pub fn set_current_protect(&self, milliamps: i32) -> Result<()> {
        CURRENT_PROTECT.write(&mut *self.conn.borrow_mut(), self.channel, &milliamps)
    }

    /// Queries the step 1 voltage in volts.
    pub fn voltage_step1(&self) -> Result<i32> {
        VOLTAGE_STEP1.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Sets the step 1 voltage in volts.
    pub fn set_voltage_step1(&self, volts: i32) -> Result<()> {
        VOLTAGE_STEP1.write(&mut *self.conn.borrow_mut(), self.channel, &volts)
    }

    /// Queries the step 1 current in amperes.
    pub fn current_step1(&self) -> Result<f64> {
        CURRENT_STEP1.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Sets the step 1 current in amperes (1e-9 to 1e1).
    pub fn set_current_step1(&self, amps: f64) -> Result<()> {
        CURRENT_STEP1.write(&mut *self.conn.borrow_mut(), self.channel, &amps)
    }

    /// Queries the step 2 voltage in volts.
    pub fn voltage_step2(&self) -> Result<i32> {
        VOLTAGE_STEP2.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Sets the step 2 voltage in volts.
    pub fn set_voltage_step2(&self, volts: i32) -> Result<()> {
        VOLTAGE_STEP2.write(&mut *self.conn.borrow_mut(), self.channel, &volts)
    }

    /// Queries the step 2 current in amperes.
    pub fn current_step2(&self) -> Result<f64> {
        CURRENT_STEP2.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Sets the step 2 current in amperes (1e-9 to 1e1).
    pub fn set_current_step2(&self, amps: f64) -> Result<()> {
        CURRENT_STEP2.write(&mut *self.conn.borrow_mut(), self.channel, &amps)
    }

    /// Queries pressure setpoint 1.
    pub fn setpoint1(&self) -> Result<f64> {
        SET_POINT1.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Sets pressure setpoint 1 (must stay above setpoint 2).
    pub fn set_setpoint1(&self, pressure: f64) -> Result<()> {
        SET_POINT1.write(&mut *self.conn.borrow_mut(), self.channel, &pressure)
    }

    /// Queries pressure setpoint 2.
    pub fn setpoint2(&self) -> Result<f64> {
        SET_POINT2.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Sets pressure setpoint 2.
    pub fn set_setpoint2(&self, pressure: f64) -> Result<()> {
        SET_POINT2.write(&mut *self.conn.borrow_mut(), self.channel, &pressure)
    }

    /// Queries the remote I/O output flags.
    pub fn remote_output(&self) -> Result<RemoteOutput> {
        REMOTE_OUTPUT.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Queries the remote I/O input flags.
    pub fn remote_input(&self) -> Result<RemoteInput> {
        REMOTE_INPUT.read(&mut *self.conn.borrow_mut(), self.channel)
    }
}

/// Gauge channel view.
pub struct GaugeChannel {
    conn: SharedTransport,
    channel: Channel,
}

impl GaugeChannel {
    fn new(conn: SharedTransport, channel: Channel) -> Self {
        Self { conn, channel }
    }

    /// Returns the channel this proxy addresses.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Queries the device type identification.
    pub fn device_type(&self) -> Result<String> {
        DEVICE_TYPE.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Queries the channel error status code.
    ///
    /// The raw code is returned; see
    /// [`gauge_error_description`](crate::gauge_error_description) for the
    /// `MG` code space.
    pub fn error_status(&self) -> Result<String> {
        ERROR_STATUS.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Queries the installed gauge model.
    pub fn device_number(&self) -> Result<GaugeDeviceNumber> {
        GAUGE_DEVICE_NUMBER.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Queries the pressure reading.
    pub fn pressure(&self) -> Result<f64> {
        PRESSURE.read(&mut *self.conn.borrow_mut(), self.channel)
    }
}

/// Serial port channel view.
pub struct SerialChannel {
    conn: SharedTransport,
    channel: Channel,
}

impl SerialChannel {
    fn new(conn: SharedTransport, channel: Channel) -> Self {
        Self { conn, channel }
    }

    /// Returns the channel this proxy addresses.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Queries the device type identification.
    pub fn device_type(&self) -> Result<String> {
        DEVICE_TYPE.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Queries the channel error status code.
    pub fn error_status(&self) -> Result<String> {
        ERROR_STATUS.read(&mut *self.conn.borrow_mut(), self.channel)
    }

    /// Queries the serial interface type.
    pub fn device_number(&self) -> Result<SerialDeviceNumber> {
        SERIAL_DEVICE_NUMBER.read(&mut *self.conn.borrow_mut(), self.channel)
    }
}
