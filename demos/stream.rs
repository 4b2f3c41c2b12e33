use nmea0183_decoder::{Decoder, Error, NmeaSentence, NoValue};

const STREAM: &[u8] = b"\
$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n\
$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E,A,S*7A\r\n\
$GPGSV,1,1,01,05,45,120,38,1*59\r\n\
$SDDPT,4.1,*7C\r\n\
$XXZZZ,data,00*4A\r\n\
$TestFrame*FF\r\n\
$GPTXT,01,01,25,DR MODE - ANTENNA FAULT^21*38\r\n";

fn describe(sentence: &NmeaSentence) {
    match sentence {
        NmeaSentence::GGA(gga) => println!(
            "GGA: {:?} {:?}, altitude {} m",
            gga.latitude.to_degrees(),
            gga.longitude.to_degrees(),
            gga.altitude as f64 / 100.0
        ),
        NmeaSentence::RMC(rmc) => println!(
            "RMC: {} knots over ground, course {}°",
            rmc.speed_over_ground as f64 / 10_000.0,
            rmc.course_over_ground as f64 / 10_000.0
        ),
        NmeaSentence::GSV(gsv) => {
            for view in gsv.views() {
                println!("GSV: satellite {} SNR {:?}", view.id, view.snr.value());
            }
        }
        NmeaSentence::DPT(dpt) => println!(
            "DPT: {} m, range scale {:?}",
            dpt.water_depth as f64 / 1000.0,
            dpt.max_range_scale.value()
        ),
        NmeaSentence::TXT(txt) => println!("TXT: {}", txt.message),
        other => println!("{}: {other:?}", other.id()),
    }
}

fn main() {
    let mut decoder = Decoder::new();

    for &byte in STREAM {
        if let Err(e) = decoder.feed(byte) {
            println!("Framing error: {e}");
        }

        if !decoder.is_frame_ready() {
            continue;
        }

        match decoder.process_frame() {
            Ok(decoded) => {
                print!("[{}] ", decoded.talker_id);
                describe(&decoded.sentence);
            }
            Err(Error::UnknownElement(decoded)) => {
                if let NmeaSentence::Unknown(frame) = &decoded.sentence {
                    println!(
                        "[{}] unsupported: {}",
                        decoded.talker_id,
                        String::from_utf8_lossy(frame)
                    );
                }
            }
            Err(e) => println!("Decoding error: {e}"),
        }
    }
}
