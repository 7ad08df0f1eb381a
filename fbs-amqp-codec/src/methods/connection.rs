use crate::defines::*;
use crate::field::LongString;
use crate::table::FieldTable;

amqp_method! {
    /// Opens the handshake, sent by the broker right after the protocol header.
    pub struct ConnectionStart("connection.start", AMQP_CLASS_CONNECTION, AMQP_METHOD_CONNECTION_START) {
        pub version_major: u8,
        pub version_minor: u8,
        pub server_properties: FieldTable,
        pub mechanisms: LongString,
        pub locales: LongString,
    }
    synchronous: true,
    responses: [ConnectionStartOk],
}

amqp_method! {
    pub struct ConnectionStartOk("connection.start-ok", AMQP_CLASS_CONNECTION, AMQP_METHOD_CONNECTION_START_OK) {
        pub client_properties: FieldTable,
        pub mechanism: String,
        /// SASL response, e.g. `\0guest\0guest` for PLAIN.
        pub response: LongString,
        pub locale: String,
    }
    synchronous: false,
    responses: [],
}

amqp_method! {
    pub struct ConnectionTune("connection.tune", AMQP_CLASS_CONNECTION, AMQP_METHOD_CONNECTION_TUNE) {
        pub channel_max: u16,
        pub frame_max: u32,
        pub heartbeat: u16,
    }
    synchronous: true,
    responses: [ConnectionTuneOk],
}

amqp_method! {
    pub struct ConnectionTuneOk("connection.tune-ok", AMQP_CLASS_CONNECTION, AMQP_METHOD_CONNECTION_TUNE_OK) {
        pub channel_max: u16,
        pub frame_max: u32,
        pub heartbeat: u16,
    }
    synchronous: false,
    responses: [],
}

amqp_method! {
    pub struct ConnectionOpen("connection.open", AMQP_CLASS_CONNECTION, AMQP_METHOD_CONNECTION_OPEN) {
        pub virtual_host: String,
        pub reserved_1: String,     // deprecated capabilities
        pub reserved_2: bool,       // deprecated insist
    }
    synchronous: true,
    responses: [ConnectionOpenOk],
}

amqp_method! {
    pub struct ConnectionOpenOk("connection.open-ok", AMQP_CLASS_CONNECTION, AMQP_METHOD_CONNECTION_OPEN_OK) {
        pub reserved_1: String,     // deprecated known-hosts
    }
    synchronous: false,
    responses: [],
}

amqp_method! {
    pub struct ConnectionClose("connection.close", AMQP_CLASS_CONNECTION, AMQP_METHOD_CONNECTION_CLOSE) {
        pub reply_code: u16,
        pub reply_text: String,
        /// Class of the method that caused the close, 0 if none.
        pub class_id: u16,
        pub method_id: u16,
    }
    synchronous: true,
    responses: [ConnectionCloseOk],
}

amqp_method! {
    pub struct ConnectionCloseOk("connection.close-ok", AMQP_CLASS_CONNECTION, AMQP_METHOD_CONNECTION_CLOSE_OK) {}
    synchronous: false,
    responses: [],
}
