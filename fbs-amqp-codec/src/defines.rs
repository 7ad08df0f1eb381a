pub const AMQP_FRAME_TYPE_METHOD: u8 = 1;
pub const AMQP_FRAME_TYPE_HEADER: u8 = 2;
pub const AMQP_FRAME_TYPE_CONTENT: u8 = 3;
pub const AMQP_FRAME_TYPE_HEARTBEAT: u8 = 8;

pub const AMQP_FRAME_END: u8 = b'\xCE';
pub const AMQP_FRAME_HEADER_SIZE: usize = 7;    // type + channel + size
pub const AMQP_FRAME_OVERHEAD: usize = AMQP_FRAME_HEADER_SIZE + 1;

pub const AMQP_METHOD_HEADER_SIZE: usize = 4;   // class-id + method-id

pub const AMQP_DEFAULT_FRAME_MAX: u32 = 131072;
pub const AMQP_DEFAULT_MAX_TABLE_DEPTH: usize = 32;

pub const AMQP_CLASS_CONNECTION: u16 = 10;
pub const AMQP_CLASS_CHANNEL: u16 = 20;
pub const AMQP_CLASS_EXCHANGE: u16 = 40;
pub const AMQP_CLASS_QUEUE: u16 = 50;
pub const AMQP_CLASS_BASIC: u16 = 60;
pub const AMQP_CLASS_CONFIRM: u16 = 85;
pub const AMQP_CLASS_TX: u16 = 90;

pub const AMQP_METHOD_CONNECTION_START: u16 = 10;
pub const AMQP_METHOD_CONNECTION_START_OK: u16 = 11;
pub const AMQP_METHOD_CONNECTION_TUNE: u16 = 30;
pub const AMQP_METHOD_CONNECTION_TUNE_OK: u16 = 31;
pub const AMQP_METHOD_CONNECTION_OPEN: u16 = 40;
pub const AMQP_METHOD_CONNECTION_OPEN_OK: u16 = 41;
pub const AMQP_METHOD_CONNECTION_CLOSE: u16 = 50;
pub const AMQP_METHOD_CONNECTION_CLOSE_OK: u16 = 51;

pub const AMQP_METHOD_CHANNEL_OPEN: u16 = 10;
pub const AMQP_METHOD_CHANNEL_OPEN_OK: u16 = 11;
pub const AMQP_METHOD_CHANNEL_FLOW: u16 = 20;
pub const AMQP_METHOD_CHANNEL_FLOW_OK: u16 = 21;
pub const AMQP_METHOD_CHANNEL_CLOSE: u16 = 40;
pub const AMQP_METHOD_CHANNEL_CLOSE_OK: u16 = 41;

pub const AMQP_METHOD_EXCHANGE_DECLARE: u16 = 10;
pub const AMQP_METHOD_EXCHANGE_DECLARE_OK: u16 = 11;

pub const AMQP_METHOD_QUEUE_DECLARE: u16 = 10;
pub const AMQP_METHOD_QUEUE_DECLARE_OK: u16 = 11;
pub const AMQP_METHOD_QUEUE_BIND: u16 = 20;
pub const AMQP_METHOD_QUEUE_BIND_OK: u16 = 21;

pub const AMQP_METHOD_BASIC_QOS: u16 = 10;
pub const AMQP_METHOD_BASIC_QOS_OK: u16 = 11;
pub const AMQP_METHOD_BASIC_CONSUME: u16 = 20;
pub const AMQP_METHOD_BASIC_CONSUME_OK: u16 = 21;
pub const AMQP_METHOD_BASIC_CANCEL: u16 = 30;
pub const AMQP_METHOD_BASIC_CANCEL_OK: u16 = 31;
pub const AMQP_METHOD_BASIC_PUBLISH: u16 = 40;
pub const AMQP_METHOD_BASIC_DELIVER: u16 = 60;
pub const AMQP_METHOD_BASIC_ACK: u16 = 80;
pub const AMQP_METHOD_BASIC_REJECT: u16 = 90;
pub const AMQP_METHOD_BASIC_NACK: u16 = 120;

pub const AMQP_METHOD_CONFIRM_SELECT: u16 = 10;
pub const AMQP_METHOD_CONFIRM_SELECT_OK: u16 = 11;

pub const AMQP_METHOD_TX_SELECT: u16 = 10;
pub const AMQP_METHOD_TX_SELECT_OK: u16 = 11;
pub const AMQP_METHOD_TX_COMMIT: u16 = 20;
pub const AMQP_METHOD_TX_COMMIT_OK: u16 = 21;

// Field table type tags, RabbitMQ flavour
pub const AMQP_TYPE_BOOL: u8 = b't';
pub const AMQP_TYPE_I8: u8 = b'b';
pub const AMQP_TYPE_U8: u8 = b'B';
pub const AMQP_TYPE_I16: u8 = b's';
pub const AMQP_TYPE_U16: u8 = b'u';
pub const AMQP_TYPE_I32: u8 = b'I';
pub const AMQP_TYPE_U32: u8 = b'i';
pub const AMQP_TYPE_I64: u8 = b'l';
pub const AMQP_TYPE_FLOAT: u8 = b'f';
pub const AMQP_TYPE_DOUBLE: u8 = b'd';
pub const AMQP_TYPE_DECIMAL: u8 = b'D';
pub const AMQP_TYPE_LONG_STRING: u8 = b'S';
pub const AMQP_TYPE_BYTE_ARRAY: u8 = b'x';
pub const AMQP_TYPE_FIELD_ARRAY: u8 = b'A';
pub const AMQP_TYPE_TIMESTAMP: u8 = b'T';
pub const AMQP_TYPE_FIELD_TABLE: u8 = b'F';
pub const AMQP_TYPE_VOID: u8 = b'V';
