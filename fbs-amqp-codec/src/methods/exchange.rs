use crate::defines::*;
use crate::table::FieldTable;

amqp_method! {
    pub struct ExchangeDeclare("exchange.declare", AMQP_CLASS_EXCHANGE, AMQP_METHOD_EXCHANGE_DECLARE) {
        pub reserved_1: u16,
        pub exchange: String,
        pub exchange_type: String,
        pub passive: bool,
        pub durable: bool,
        pub auto_delete: bool,
        pub internal: bool,
        pub no_wait: bool,
        pub arguments: FieldTable,
    }
    synchronous: true,
    responses: [ExchangeDeclareOk],
    no_wait: no_wait,
}

amqp_method! {
    pub struct ExchangeDeclareOk("exchange.declare-ok", AMQP_CLASS_EXCHANGE, AMQP_METHOD_EXCHANGE_DECLARE_OK) {}
    synchronous: false,
    responses: [],
}
