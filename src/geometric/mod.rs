pub mod batch;
pub mod map_preview;
pub mod parcel;
