//! Raster buffer with compile-time color space tagging.
//!
//! [`Image<C, T, N>`] is the raster of the pipeline:
//! - `C: ColorSpace` - color space marker (keeps BGR and RGB apart)
//! - `T: PixelFormat` - sample type (`u8`, `f32`, `f64`)
//! - `N` - channels per pixel (3 for color, 1 for gray and XYZ planes)
//!
//! # Memory Layout
//!
//! Pixels are stored **row-major**, channels interleaved, top-to-bottom:
//!
//! ```text
//! Memory: [c0 c1 c2 c0 c1 c2 ...]  <- Row 0
//!         [c0 c1 c2 c0 c1 c2 ...]  <- Row 1
//! ```
//!
//! This is the (row, column, channel) layout of a decoded image, so a
//! decoder's buffer can be wrapped without copying via [`Image::from_shape`].
//!
//! # Purity
//!
//! Transforms never touch their input. [`Image::map_into`] always allocates
//! a new raster, and the buffer is shared behind an [`Arc`], so clones are
//! cheap and copy-on-write.
//!
//! ```rust
//! use tint_core::{Image, Rgb, Gray};
//!
//! let rgb: Image<Rgb, u8, 3> = Image::filled(4, 4, [10, 20, 30]);
//! let sum: Image<Gray, f64, 1> =
//!     rgb.map_into(|[r, g, b]| [r as f64 + g as f64 + b as f64]);
//! assert_eq!(sum.pixel(0, 0), [60.0]);
//! ```

use crate::{ColorSpace, Error, PixelFormat, Result};
use std::marker::PhantomData;
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Owned raster with compile-time color space, sample type and channel count.
///
/// # Example
///
/// ```rust
/// use tint_core::{Image, Bgr};
///
/// let mut img: Image<Bgr, u8, 3> = Image::new(2, 2);
/// img.set_pixel(1, 0, [255, 128, 0]);
/// assert_eq!(img.pixel(1, 0), [255, 128, 0]);
/// assert_eq!(img.shape(), (2, 2, 3));
/// ```
#[derive(Clone)]
pub struct Image<C: ColorSpace, T: PixelFormat, const N: usize> {
    /// Sample buffer (Arc for cheap cloning)
    data: Arc<Vec<T>>,
    /// Width in pixels (columns)
    width: u32,
    /// Height in pixels (rows)
    height: u32,
    /// Color space marker
    _colorspace: PhantomData<C>,
}

impl<C: ColorSpace, T: PixelFormat, const N: usize> Image<C, T, N> {
    /// Creates a raster filled with zeros.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * N;
        Self::from_vec_unchecked(width, height, vec![T::zero(); len])
    }

    /// Creates a raster from interleaved samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len() != width * height * N`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_core::{Image, Rgb};
    ///
    /// let img: Image<Rgb, u8, 3> = Image::from_data(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(img.pixel(1, 0), [4, 5, 6]);
    /// ```
    pub fn from_data(width: u32, height: u32, data: Vec<T>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(N))
            .ok_or_else(|| Error::invalid_dimensions(width, height, "size overflows"))?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self::from_vec_unchecked(width, height, data))
    }

    /// Creates a raster from a `(rows, cols, channels)` shaped buffer.
    ///
    /// This is the entry point for buffers coming from a decoder, where the
    /// channel count is only known at run time.
    ///
    /// # Errors
    ///
    /// - [`Error::ChannelMismatch`] if `channels != N`
    /// - [`Error::InvalidDimensions`] if the shape does not fit `u32` or
    ///   doesn't match `data.len()`
    ///
    /// ```rust
    /// use tint_core::{Image, Bgr};
    ///
    /// let rgba = vec![0u8; 2 * 2 * 4];
    /// assert!(Image::<Bgr, u8, 3>::from_shape(2, 2, 4, rgba).is_err());
    /// ```
    pub fn from_shape(rows: usize, cols: usize, channels: usize, data: Vec<T>) -> Result<Self> {
        if channels != N {
            return Err(Error::channel_mismatch(N, channels));
        }
        let width = u32::try_from(cols)
            .map_err(|_| Error::invalid_dimensions(u32::MAX, 0, "column count exceeds u32"))?;
        let height = u32::try_from(rows)
            .map_err(|_| Error::invalid_dimensions(width, u32::MAX, "row count exceeds u32"))?;
        Self::from_data(width, height, data)
    }

    /// Creates a raster with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: [T; N]) -> Self {
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * N);
        for _ in 0..count {
            data.extend_from_slice(&pixel);
        }
        Self::from_vec_unchecked(width, height, data)
    }

    #[inline]
    fn from_vec_unchecked(width: u32, height: u32, data: Vec<T>) -> Self {
        Self {
            data: Arc::new(data),
            width,
            height,
            _colorspace: PhantomData,
        }
    }

    /// Returns the width (columns).
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height (rows).
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the array shape `(rows, cols, channels)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, N)
    }

    /// Returns the number of channels per pixel.
    #[inline]
    pub const fn channels(&self) -> usize {
        N
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the raster has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the interleaved samples.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Consumes the raster and returns its samples, cloning only if shared.
    pub fn into_vec(self) -> Vec<T> {
        Arc::try_unwrap(self.data).unwrap_or_else(|shared| (*shared).clone())
    }

    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * N
    }

    /// Returns the pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [T; N] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.pixel_offset(x, y);
        let mut result = [T::zero(); N];
        result.copy_from_slice(&self.data[offset..offset + N]);
        result
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[T; N]> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Sets the pixel at (x, y), copying the buffer first if it is shared.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: [T; N]) {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.pixel_offset(x, y);
        let data = Arc::make_mut(&mut self.data);
        data[offset..offset + N].copy_from_slice(&pixel);
    }

    /// Returns one row of samples.
    ///
    /// # Panics
    ///
    /// Panics if y >= height.
    #[inline]
    pub fn row(&self, y: u32) -> &[T] {
        assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize * N;
        &self.data[start..start + self.width as usize * N]
    }

    /// Iterates over all pixels with their coordinates.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, [T; N])> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }

    /// Applies a per-pixel function, producing a new raster.
    ///
    /// The target space, sample type and channel count are free, which is how
    /// every stage of the pipeline is written. With the `parallel` feature
    /// rows are processed on the rayon pool; the output is the same either way
    /// because `f` sees one pixel at a time.
    ///
    /// ```rust
    /// use tint_core::{Image, Rgb, Bgr};
    ///
    /// let rgb: Image<Rgb, u8, 3> = Image::filled(3, 3, [1, 2, 3]);
    /// let bgr: Image<Bgr, u8, 3> = rgb.map_into(|[r, g, b]| [b, g, r]);
    /// assert_eq!(bgr.pixel(2, 2), [3, 2, 1]);
    /// ```
    pub fn map_into<C2, T2, const M: usize, F>(&self, f: F) -> Image<C2, T2, M>
    where
        C2: ColorSpace,
        T2: PixelFormat,
        F: Fn([T; N]) -> [T2; M] + Send + Sync,
    {
        if self.is_empty() || N == 0 || M == 0 {
            return Image::new(self.width, self.height);
        }

        let width = self.width as usize;
        let mut out = vec![T2::zero(); self.pixel_count() * M];

        let map_row = |src: &[T], dst: &mut [T2]| {
            for (s, d) in src.chunks_exact(N).zip(dst.chunks_exact_mut(M)) {
                let mut px = [T::zero(); N];
                px.copy_from_slice(s);
                d.copy_from_slice(&f(px));
            }
        };

        #[cfg(feature = "parallel")]
        out.par_chunks_mut(width * M)
            .zip(self.data.par_chunks(width * N))
            .for_each(|(dst, src)| map_row(src, dst));

        #[cfg(not(feature = "parallel"))]
        out.chunks_mut(width * M)
            .zip(self.data.chunks(width * N))
            .for_each(|(dst, src)| map_row(src, dst));

        Image::from_vec_unchecked(self.width, self.height, out)
    }

    /// Splits the raster into one single-channel plane per channel.
    ///
    /// ```rust
    /// use tint_core::{Image, Rgb, Xyz};
    ///
    /// let img: Image<Rgb, u8, 3> = Image::filled(2, 2, [7, 8, 9]);
    /// let [r, g, b] = img.split_channels::<Xyz>();
    /// assert_eq!((r.pixel(0, 0), g.pixel(0, 0), b.pixel(0, 0)), ([7], [8], [9]));
    /// ```
    pub fn split_channels<C2: ColorSpace>(&self) -> [Image<C2, T, 1>; N] {
        std::array::from_fn(|c| self.map_into(move |px: [T; N]| [px[c]]))
    }

    /// Stacks `N` single-channel planes into one raster (depth-wise).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the planes differ in size.
    pub fn stack<C2: ColorSpace>(planes: [&Image<C2, T, 1>; N]) -> Result<Self> {
        let (width, height) = match planes.first() {
            Some(p) => p.dimensions(),
            None => return Err(Error::channel_mismatch(1, 0)),
        };
        if let Some(bad) = planes.iter().find(|p| p.dimensions() != (width, height)) {
            return Err(Error::dimension_mismatch((width, height), bad.dimensions()));
        }
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * N);
        for i in 0..count {
            for plane in &planes {
                data.push(plane.data[i]);
            }
        }
        Ok(Self::from_vec_unchecked(width, height, data))
    }

    /// Changes the color space tag without touching the samples.
    ///
    /// Zero-cost; use it only when the data is known to be in `C2` already.
    /// For an actual conversion use the functions in `tint-color`.
    pub fn reinterpret<C2: ColorSpace>(self) -> Image<C2, T, N> {
        Image {
            data: self.data,
            width: self.width,
            height: self.height,
            _colorspace: PhantomData,
        }
    }

    /// Casts every sample to another type through `f64`.
    ///
    /// Values are raw, so casting a float gray raster to `u8` truncates the
    /// luma rather than rescaling it:
    ///
    /// ```rust
    /// use tint_core::{Image, Gray};
    ///
    /// let gray: Image<Gray, f64, 1> = Image::filled(1, 1, [127.9]);
    /// let bytes: Image<Gray, u8, 1> = gray.convert_format();
    /// assert_eq!(bytes.pixel(0, 0), [127]);
    /// ```
    pub fn convert_format<T2: PixelFormat>(&self) -> Image<C, T2, N> {
        self.map_into(|px: [T; N]| px.map(|v| T2::from_f64(v.to_f64())))
    }
}

impl<C: ColorSpace, T: PixelFormat + PartialEq, const N: usize> PartialEq for Image<C, T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions() && self.data() == other.data()
    }
}

impl<C: ColorSpace, T: PixelFormat, const N: usize> std::fmt::Debug for Image<C, T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &N)
            .field("colorspace", &C::NAME)
            .field("format", &std::any::type_name::<T>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bgr, Gray, Rgb, Xyz};

    #[test]
    fn test_image_new() {
        let img: Image<Rgb, u8, 3> = Image::new(100, 50);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.channels(), 3);
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.shape(), (50, 100, 3));
    }

    #[test]
    fn test_image_filled() {
        let img: Image<Rgb, f64, 3> = Image::filled(10, 10, [1.0, 0.5, 0.25]);
        assert_eq!(img.pixel(0, 0), [1.0, 0.5, 0.25]);
        assert_eq!(img.pixel(9, 9), [1.0, 0.5, 0.25]);
    }

    #[test]
    fn test_image_set_get_pixel() {
        let mut img: Image<Bgr, u8, 3> = Image::new(10, 10);
        img.set_pixel(5, 5, [1, 2, 3]);
        assert_eq!(img.pixel(5, 5), [1, 2, 3]);
        assert_eq!(img.pixel(0, 0), [0, 0, 0]);
        assert_eq!(img.get_pixel(10, 0), None);
    }

    #[test]
    fn test_image_from_data_wrong_size() {
        let result: Result<Image<Rgb, u8, 3>> = Image::from_data(10, 10, vec![0; 10]);
        assert!(matches!(result, Err(Error::InvalidDimensions { .. })));
    }

    #[test]
    fn test_from_shape_channel_mismatch() {
        let result = Image::<Rgb, u8, 3>::from_shape(2, 2, 4, vec![0; 16]);
        match result {
            Err(Error::ChannelMismatch { expected, got }) => {
                assert_eq!(expected, 3);
                assert_eq!(got, 4);
            }
            other => panic!("unexpected: {:?}", other.map(|i| i.shape())),
        }
    }

    #[test]
    fn test_from_shape_row_major() {
        // rows=2, cols=3
        let data: Vec<u8> = (0..18).collect();
        let img = Image::<Rgb, u8, 3>::from_shape(2, 3, 3, data).unwrap();
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 2);
        assert_eq!(img.pixel(0, 1), [9, 10, 11]);
        assert_eq!(img.row(1), &[9, 10, 11, 12, 13, 14, 15, 16, 17]);
    }

    #[test]
    fn test_map_into_leaves_input() {
        let src: Image<Rgb, u8, 3> = Image::filled(4, 3, [1, 2, 3]);
        let before = src.clone();
        let dst: Image<Gray, f64, 1> = src.map_into(|[r, g, b]| [(r + g + b) as f64]);
        assert_eq!(src, before);
        assert_eq!(dst.shape(), (3, 4, 1));
        assert!(dst.pixels().all(|(_, _, px)| px == [6.0]));
    }

    #[test]
    fn test_map_into_empty() {
        let src: Image<Rgb, u8, 3> = Image::new(0, 5);
        let dst: Image<Rgb, u8, 3> = src.map_into(|px| px);
        assert!(dst.is_empty());
        assert_eq!(dst.height(), 5);
    }

    #[test]
    fn test_map_into_preserves_order() {
        let data: Vec<u8> = (0..2 * 5 * 3).map(|v| v as u8).collect();
        let src = Image::<Rgb, u8, 3>::from_data(5, 2, data).unwrap();
        let dst: Image<Rgb, u8, 3> = src.map_into(|px| px);
        assert_eq!(src.data(), dst.data());
    }

    #[test]
    fn test_split_and_stack() {
        let src = Image::<Rgb, u8, 3>::from_data(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let [a, b, c] = src.split_channels::<Xyz>();
        assert_eq!(a.data(), &[1, 4]);
        assert_eq!(b.data(), &[2, 5]);
        assert_eq!(c.data(), &[3, 6]);
        let back = Image::<Rgb, u8, 3>::stack([&a, &b, &c]).unwrap();
        assert_eq!(back, src);
    }

    #[test]
    fn test_stack_dimension_mismatch() {
        let a: Image<Xyz, f64, 1> = Image::new(2, 2);
        let b: Image<Xyz, f64, 1> = Image::new(3, 2);
        let result = Image::<Xyz, f64, 2>::stack([&a, &b]);
        assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
    }

    #[test]
    fn test_into_vec_shared() {
        let img: Image<Rgb, u8, 3> = Image::filled(1, 1, [9, 8, 7]);
        let keep = img.clone();
        assert_eq!(img.into_vec(), vec![9, 8, 7]);
        assert_eq!(keep.pixel(0, 0), [9, 8, 7]);
    }

    #[test]
    fn test_clone_cow() {
        let img1: Image<Rgb, u8, 3> = Image::filled(2, 2, [1, 0, 0]);
        let mut img2 = img1.clone();
        img2.set_pixel(0, 0, [0, 1, 0]);
        assert_eq!(img1.pixel(0, 0), [1, 0, 0]);
        assert_eq!(img2.pixel(0, 0), [0, 1, 0]);
    }

    #[test]
    #[should_panic(expected = "pixel out of bounds")]
    fn test_pixel_past_row_end_panics() {
        // (2, 0) would otherwise alias the first pixel of row 1
        let img: Image<Rgb, u8, 3> = Image::filled(2, 2, [1, 2, 3]);
        let _ = img.pixel(2, 0);
    }

    #[test]
    #[should_panic(expected = "pixel out of bounds")]
    fn test_set_pixel_past_row_end_panics() {
        let mut img: Image<Rgb, u8, 3> = Image::new(2, 2);
        img.set_pixel(2, 0, [1, 2, 3]);
    }

    #[test]
    fn test_get_pixel_bounds() {
        let img: Image<Rgb, u8, 3> = Image::filled(2, 2, [1, 2, 3]);
        assert_eq!(img.get_pixel(1, 1), Some([1, 2, 3]));
        assert_eq!(img.get_pixel(2, 0), None);
    }

    #[test]
    fn test_convert_format_truncates() {
        let img: Image<Gray, f64, 1> = Image::filled(2, 2, [99.99]);
        let bytes: Image<Gray, u8, 1> = img.convert_format();
        assert_eq!(bytes.pixel(1, 1), [99]);
    }

    #[test]
    fn test_reinterpret() {
        let img: Image<Bgr, u8, 3> = Image::filled(1, 1, [1, 2, 3]);
        let same: Image<Rgb, u8, 3> = img.reinterpret();
        assert_eq!(same.pixel(0, 0), [1, 2, 3]);
    }
}
