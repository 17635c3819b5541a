use crate::sentence::{Result, SentenceBuffer};
use crate::state::SkyView;

// $GPGSV,t,g,nn,p1,e1,a1,s1,...*hh  (up to four satellites per sentence)

/// Satellites-in-view report: one sentence per group of four satellites,
/// each carrying its own checksum. The last group keeps exactly the
/// remaining satellites; no padding entries are emitted.
pub fn gsv(sky: &SkyView, out: &mut SentenceBuffer) -> Result<usize> {
    let visible = sky.satellites.len();
    if visible == 0 {
        return Ok(0);
    }
    let groups = (visible - 1) / 4 + 1;
    let mut appended = 0;
    for (group, chunk) in sky.satellites.chunks(4).enumerate() {
        let mut w = out.sentence("$GPGSV");
        w.int(groups as i64);
        w.int(group as i64 + 1);
        w.int_padded(visible as i64, 2);
        for sat in chunk {
            w.int_padded(sat.prn as i64, 2);
            w.int_padded(sat.elevation as i64, 2);
            w.int_padded(sat.azimuth as i64, 3);
            w.num_padded(sat.ss, 2, 0);
        }
        appended += w.finish()?;
    }
    Ok(appended)
}
