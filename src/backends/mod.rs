mod wire;

pub use wire::WireBackend;
