// src/segment/header.rs
use bytes::{BufMut, BytesMut};
use tracing::trace;

use super::Segment;
use crate::error::{Result, SplitError};
use crate::utils::{current_millis, message_reference};

/// Width of the concatenation reference number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReferenceForm {
    /// 8-bit reference, information element 0x00
    #[default]
    Short,
    /// 16-bit reference, information element 0x08
    Long,
}

/// Fixed byte layout of a concatenation header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    pub info_element_id: u8,
    pub reference_len: usize,
    /// Total UDH length, including the leading length byte
    pub udh_len: usize,
}

static LAYOUTS: [HeaderLayout; 2] = [
    HeaderLayout { info_element_id: 0x00, reference_len: 1, udh_len: 6 },
    HeaderLayout { info_element_id: 0x08, reference_len: 2, udh_len: 7 },
];

impl ReferenceForm {
    pub fn from_short(short_reference: bool) -> Self {
        if short_reference {
            ReferenceForm::Short
        } else {
            ReferenceForm::Long
        }
    }

    pub fn layout(self) -> &'static HeaderLayout {
        match self {
            ReferenceForm::Short => &LAYOUTS[0],
            ReferenceForm::Long => &LAYOUTS[1],
        }
    }
}

impl HeaderLayout {
    /// Value of the first byte: length of the header that follows it
    pub fn header_length(&self) -> u8 {
        (self.udh_len - 1) as u8
    }

    /// Length of the information element data (reference, count, sequence)
    pub fn info_element_data_length(&self) -> u8 {
        (self.udh_len - 3) as u8
    }
}

/// Stamps every segment with a concatenation header.
///
/// A single segment (or none) is returned unchanged. The reference number is
/// derived from the first segment and the current time, so calling twice
/// gives different references for the same message.
///
/// If messages cannot be told apart on the receiving side, try the
/// [`ReferenceForm::Long`] form.
pub fn append_udhs(segments: Vec<Segment>, form: ReferenceForm) -> Result<Vec<Segment>> {
    append_udhs_at(segments, form, current_millis())
}

/// [`append_udhs`] with the clock reading supplied by the caller.
pub fn append_udhs_at(mut segments: Vec<Segment>, form: ReferenceForm, millis: u64) -> Result<Vec<Segment>> {
    if segments.len() <= 1 {
        return Ok(segments);
    }

    let total = u8::try_from(segments.len()).map_err(|_| SplitError::TooManySegments(segments.len()))?;
    let layout = form.layout();

    let first = &segments[0];
    let reference = message_reference(&first.from, &first.to, &first.content, millis);

    trace!(?form, segments = total, "appending concatenation headers");

    for (idx, segment) in segments.iter_mut().enumerate() {
        let mut udh = BytesMut::with_capacity(layout.udh_len);

        udh.put_u8(layout.header_length());
        udh.put_u8(layout.info_element_id);
        udh.put_u8(layout.info_element_data_length());
        udh.put_slice(&reference[..layout.reference_len]);
        udh.put_u8(total);
        // idx < total <= 255
        udh.put_u8(idx as u8 + 1);

        segment.udh = udh.freeze();
    }

    Ok(segments)
}
