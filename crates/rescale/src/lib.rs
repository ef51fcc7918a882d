#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use rescale_image as image;

#[doc(inline)]
pub use rescale_imgproc as imgproc;

#[doc(inline)]
pub use rescale_io as io;
