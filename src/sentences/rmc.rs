use crate::format::{degrees_to_minutes, utc_time};
use crate::sentence::{Result, SentenceBuffer};
use crate::state::{FixStatus, GnssFix, NavigationData};

// $GPRMC,hhmmss,A,llll.llll,a,yyyyy.yyyy,a,s.s,c.c,ddmmyy,,*hh

/// Recommended minimum navigation sentence. Always emitted for a position
/// cycle; a receiver warning status of `V` marks fixes below quality.
pub fn rmc(fix: &GnssFix, nav: &NavigationData, out: &mut SentenceBuffer) -> Result<usize> {
    let mut w = out.sentence("$GPRMC");
    let tm = utc_time(fix.time);
    match tm {
        Some(tm) => w.field(&format!("{:02}{:02}{:02}", tm.hour, tm.minute, tm.second)),
        None => w.blank(),
    }
    w.letter(if fix.status == FixStatus::NoFix { 'V' } else { 'A' });
    w.num_padded(degrees_to_minutes(fix.latitude), 9, 4);
    w.hemisphere(fix.latitude, 'N', 'S');
    w.num_padded(degrees_to_minutes(fix.longitude), 10, 4);
    w.hemisphere(fix.longitude, 'E', 'W');
    w.num(nav.speed_over_ground, 4);
    w.num(nav.course_over_ground, 3);
    match tm {
        Some(tm) => w.field(&format!("{:02}{:02}{:02}", tm.day, tm.month, tm.year % 100)),
        None => w.blank(),
    }
    w.blank(); // magnetic variation not carried here
    w.blank();
    w.finish()
}
