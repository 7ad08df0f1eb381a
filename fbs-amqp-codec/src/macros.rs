/// Declares a method type from its field list.
///
/// The struct gets one public field per AMQP argument, in wire order. Field
/// types pick the wire type (`bool` bit, `u8` octet, `u16` short, `u32` long,
/// `u64` longlong, `String` shortstr, `LongString` longstr, `FieldTable`
/// table). Pack and unpack go through the shared descriptor driven codec.
///
/// ```
/// use fbs_amqp_codec::{amqp_method, Method, MethodDecode};
///
/// amqp_method! {
///     pub struct Ping("test.ping", 1000, 10) {
///         pub sequence: u32,
///     }
///     synchronous: true,
///     responses: [Pong],
/// }
///
/// amqp_method! {
///     pub struct Pong("test.pong", 1000, 11) {
///         pub sequence: u32,
///     }
///     synchronous: false,
///     responses: [],
/// }
///
/// let payload = Ping { sequence: 7 }.to_payload().unwrap();
/// assert_eq!(payload, [0x03, 0xE8, 0x00, 0x0A, 0x00, 0x00, 0x00, 0x07]);
/// assert_eq!(Ping::unpack(&payload).unwrap(), Ping { sequence: 7 });
/// ```
///
/// A trailing `no_wait: <field>,` clause names the bit that lets the caller
/// skip the reply; `expects_reply()` then honours it.
#[macro_export]
macro_rules! amqp_method {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($label:literal, $class_id:expr, $method_id:expr) {
            $( $(#[$field_meta:meta])* pub $field:ident : $ty:ty ),* $(,)?
        }
        synchronous: $synchronous:literal,
        responses: [$( $response:ty ),* $(,)?],
        $( no_wait: $no_wait:ident, )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $( $(#[$field_meta])* pub $field: $ty, )*
        }

        impl $name {
            pub const ID: $crate::MethodId = $crate::MethodId::new($class_id, $method_id);
        }

        impl $crate::Method for $name {
            fn spec(&self) -> &'static $crate::MethodSpec {
                <Self as $crate::MethodDecode>::SPEC
            }

            fn fields(&self) -> ::std::vec::Vec<$crate::FieldRef<'_>> {
                ::std::vec![ $( <$ty as $crate::FieldKind>::as_field(&self.$field), )* ]
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn clone_boxed(&self) -> ::std::boxed::Box<dyn $crate::Method> {
                ::std::boxed::Box::new(::std::clone::Clone::clone(self))
            }

            fn expects_reply(&self) -> bool {
                $synchronous $( && !self.$no_wait )?
            }
        }

        impl $crate::MethodDecode for $name {
            const SPEC: &'static $crate::MethodSpec = &$crate::MethodSpec {
                name: $label,
                id: $name::ID,
                synchronous: $synchronous,
                fields: &[
                    $( $crate::FieldSpec { name: stringify!($field), wire_type: <$ty as $crate::FieldKind>::WIRE_TYPE }, )*
                ],
                responses: &[ $( <$response>::ID, )* ],
            };

            #[allow(unused_mut, unused_variables)]
            fn from_fields(values: ::std::vec::Vec<$crate::FieldValue>) -> ::std::result::Result<Self, &'static str> {
                let mut values = values.into_iter();

                ::std::result::Result::Ok(Self {
                    $(
                        $field: values.next()
                            .and_then(<$ty as $crate::FieldKind>::from_field)
                            .ok_or(stringify!($field))?,
                    )*
                })
            }
        }
    };
}
