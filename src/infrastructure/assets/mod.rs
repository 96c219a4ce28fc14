mod offline_bundle;

pub use offline_bundle::BundleAsset;
