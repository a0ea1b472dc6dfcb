use crate::error::ColormapError;

/// A single channel entry in a color description passed to
/// [`Colormap::add`](super::Colormap::add).
///
/// Hosts hand over whatever they have (numbers, or text straight from a
/// command line or script); entries that cannot be read as a finite number
/// are reported, not panicked on.
pub trait ToChannel {
    fn to_channel(&self) -> Option<f32>;

    /// Text shown when the entry is rejected.
    fn describe(&self) -> String;
}

impl ToChannel for f32 {
    fn to_channel(&self) -> Option<f32> {
        self.is_finite().then_some(*self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl ToChannel for f64 {
    fn to_channel(&self) -> Option<f32> {
        (*self as f32).to_channel()
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl ToChannel for str {
    fn to_channel(&self) -> Option<f32> {
        self.trim().parse::<f32>().ok().and_then(|v| v.to_channel())
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl ToChannel for String {
    fn to_channel(&self) -> Option<f32> {
        self.as_str().to_channel()
    }

    fn describe(&self) -> String {
        self.clone()
    }
}

impl<T: ToChannel + ?Sized> ToChannel for &T {
    fn to_channel(&self) -> Option<f32> {
        (**self).to_channel()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Reads a 3- or 4-entry channel description into straight RGBA.
///
/// Alpha defaults to 1 when only RGB is given.
pub(crate) fn read_rgba<C: ToChannel>(channels: &[C]) -> Result<[f32; 4], ColormapError> {
    if !(3..=4).contains(&channels.len()) {
        return Err(ColormapError::ChannelCount { got: channels.len() });
    }

    let mut rgba = [1.0; 4];
    for (index, (slot, channel)) in rgba.iter_mut().zip(channels).enumerate() {
        *slot = channel
            .to_channel()
            .ok_or_else(|| ColormapError::NonNumericChannel { index, text: channel.describe() })?;
    }
    Ok(rgba)
}
