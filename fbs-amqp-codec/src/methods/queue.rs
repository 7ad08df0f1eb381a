use crate::defines::*;
use crate::table::FieldTable;

amqp_method! {
    pub struct QueueDeclare("queue.declare", AMQP_CLASS_QUEUE, AMQP_METHOD_QUEUE_DECLARE) {
        pub reserved_1: u16,
        /// Empty name asks the broker to generate one.
        pub queue: String,
        pub passive: bool,
        pub durable: bool,
        pub exclusive: bool,
        pub auto_delete: bool,
        pub no_wait: bool,
        pub arguments: FieldTable,
    }
    synchronous: true,
    responses: [QueueDeclareOk],
    no_wait: no_wait,
}

amqp_method! {
    pub struct QueueDeclareOk("queue.declare-ok", AMQP_CLASS_QUEUE, AMQP_METHOD_QUEUE_DECLARE_OK) {
        pub queue: String,
        pub message_count: u32,
        pub consumer_count: u32,
    }
    synchronous: false,
    responses: [],
}

amqp_method! {
    pub struct QueueBind("queue.bind", AMQP_CLASS_QUEUE, AMQP_METHOD_QUEUE_BIND) {
        pub reserved_1: u16,
        pub queue: String,
        pub exchange: String,
        pub routing_key: String,
        pub no_wait: bool,
        pub arguments: FieldTable,
    }
    synchronous: true,
    responses: [QueueBindOk],
    no_wait: no_wait,
}

amqp_method! {
    pub struct QueueBindOk("queue.bind-ok", AMQP_CLASS_QUEUE, AMQP_METHOD_QUEUE_BIND_OK) {}
    synchronous: false,
    responses: [],
}
