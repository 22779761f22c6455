// @generated
// This file wires up buf-generated protobuf code
// Note: The prost files already include!() the tonic files automatically

pub mod authorize {
    include!("authorize.v1.rs");
    // authorize.v1.tonic.rs is auto-included by authorize.v1.rs
}
