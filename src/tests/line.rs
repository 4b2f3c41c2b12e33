use nom::error::ErrorKind;

use crate::{Error, NmeaSentence, SentenceId, TalkerId, process_line};

#[cfg(all(
    feature = "autopilot",
    feature = "communications",
    feature = "compass",
    feature = "echo-sounder",
    feature = "gps",
    feature = "heading",
    feature = "other",
    feature = "weather"
))]
const VALID_LINES: [(&str, SentenceId); 28] = [
    ("$GPAAM,A,A,0.10,N,WPTNME*32\r\n", SentenceId::AAM),
    (
        "$GPALM,1,1,15,1159,74,441d,4e,16be,fd5e,a10c9f,4a2da4,686e81,a8cbe1,0a4,401*24\r\n",
        SentenceId::ALM,
    ),
    ("$ECAPB,A,A,0.10,R,N,V,V,011,M,DEST,011,M,011,M*2D\r\n", SentenceId::APB),
    (
        "$GPBEC,220516,5130.02,N,00046.34,W,213.8,T,218.0,M,0004.6,N,EGLM*33\r\n",
        SentenceId::BEC,
    ),
    ("$GPBOD,045.,T,023.,M,DEST,START*01\r\n", SentenceId::BOD),
    ("$GPBWW,097.0,T,103.2,M,POINTB,POINTA*41\r\n", SentenceId::BWW),
    ("$SDDBK,,f,22.5,M,,F*2C\r\n", SentenceId::DBK),
    ("$SDDBS,7.8,f,2.4,M,1.3,F*0A\r\n", SentenceId::DBS),
    ("$SDDBT,7.8,f,2.4,M,1.3,F*0D\r\n", SentenceId::DBT),
    ("$SDDPT,4.1,*7C\r\n", SentenceId::DPT),
    ("$SDDPT,76.1,,100*54\r\n", SentenceId::DPT),
    ("$CDFSI,020230,026140,m,5*01\r\n", SentenceId::FSI),
    (
        "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n",
        SentenceId::GGA,
    ),
    ("$GPGLL,4916.45,N,12311.12,W,225444,A*31\r\n", SentenceId::GLL),
    (
        "$GNGSA,A,3,80,71,73,79,69,,,,,,,,1.83,1.09,1.47*17\r\n",
        SentenceId::GSA,
    ),
    ("$GPGSA,A,3,13,15,18,,,,,,,,,,1.7,1.0,1.3,1*25\r\n", SentenceId::GSA),
    ("$GPGSV,1,1,01,05,45,120,38,1*59\r\n", SentenceId::GSV),
    ("$HCHDG,98.3,0.0,E,12.6,W*57\r\n", SentenceId::HDG),
    ("$HCHDM,235.6,M*2B\r\n", SentenceId::HDM),
    ("$HEHDT,274.07,T*19\r\n", SentenceId::HDT),
    ("$SDMTW,26.8,C*08\r\n", SentenceId::MTW),
    ("$WIMWV,214.8,R,0.1,K,A*28\r\n", SentenceId::MWV),
    (
        "$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68\r\n",
        SentenceId::RMC,
    ),
    (
        "$GPTXT,01,01,02,u-blox ag - www.u-blox.com*50\r\n",
        SentenceId::TXT,
    ),
    (
        "$VWVHW,245.1,T,243.8,M,047.01,N,087.04,K*52\r\n",
        SentenceId::VHW,
    ),
    ("$GPVTG,220.86,T,,M,2.550,N,4.724,K,A*34\r\n", SentenceId::VTG),
    ("$GPZDA,160012.71,11,03,2004,05,45*65\r\n", SentenceId::ZDA),
    ("$GPZDA,160012.71,11,03,2004,-00,30*4F\r\n", SentenceId::ZDA),
];

#[cfg(all(
    feature = "autopilot",
    feature = "communications",
    feature = "compass",
    feature = "echo-sounder",
    feature = "gps",
    feature = "heading",
    feature = "other",
    feature = "weather"
))]
#[test]
fn test_valid_lines() {
    for (line, id) in VALID_LINES {
        let result = process_line(line);
        assert!(result.is_ok(), "Failed: {line:?}\n\t{result:?}");

        let decoded = result.unwrap();
        assert!(decoded.valid, "Failed: {line:?}");
        assert_eq!(decoded.id(), id, "Failed: {line:?}");
    }
}

#[cfg(all(
    feature = "autopilot",
    feature = "communications",
    feature = "compass",
    feature = "echo-sounder",
    feature = "gps",
    feature = "heading",
    feature = "other",
    feature = "weather"
))]
#[test]
fn test_checksum_bit_flip() {
    const HEX_DIGITS: &[u8] = b"0123456789ABCDEFabcdef";

    for (line, _) in VALID_LINES {
        let star = line.find('*').unwrap();

        for digit in [star + 1, star + 2] {
            for bit in 0..8 {
                let mut corrupted = line.as_bytes().to_vec();
                corrupted[digit] ^= 1 << bit;

                let result = process_line(&corrupted);
                let flipped = corrupted[digit];

                // Flipping the case bit of a letter keeps the checksum value.
                if flipped.eq_ignore_ascii_case(&line.as_bytes()[digit])
                    && HEX_DIGITS.contains(&flipped)
                {
                    assert!(result.is_ok(), "Failed: {corrupted:?}\n\t{result:?}");
                    continue;
                }

                assert!(
                    matches!(result, Err(Error::ChecksumError { .. })),
                    "Failed: {corrupted:?}\n\t{result:?}"
                );
            }
        }
    }
}

#[cfg(all(
    feature = "autopilot",
    feature = "communications",
    feature = "compass",
    feature = "echo-sounder",
    feature = "gps",
    feature = "heading",
    feature = "other",
    feature = "weather"
))]
#[test]
fn test_idempotence() {
    for (line, _) in VALID_LINES {
        assert_eq!(process_line(line), process_line(line), "Failed: {line:?}");
    }
}

#[cfg(feature = "gps")]
#[test]
fn test_rmc_scenario() {
    use crate::{Coordinate, Date, Magnetic, Time};

    let decoded = process_line(
        "$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E,A,S*7A\r\n",
    )
    .unwrap();

    assert_eq!(decoded.talker_id, TalkerId::GP);
    assert_eq!(decoded.id(), SentenceId::RMC);
    assert!(decoded.valid);

    let NmeaSentence::RMC(rmc) = decoded.sentence else {
        panic!("Unexpected sentence {:?}", decoded.sentence);
    };
    assert_eq!(
        rmc.time,
        Time {
            hour: 22,
            minute: 54,
            second: 46,
            millisecond: 0xFFFF,
        }
    );
    assert_eq!(rmc.status, 'A');
    assert_eq!(
        rmc.latitude,
        Coordinate {
            direction: 'N',
            degree: 49,
            minute: 164_500_000,
        }
    );
    assert_eq!(
        rmc.longitude,
        Coordinate {
            direction: 'W',
            degree: 123,
            minute: 111_200_000,
        }
    );
    assert_eq!(rmc.speed_over_ground, 5000);
    assert_eq!(rmc.course_over_ground, 547_000);
    assert_eq!(
        rmc.date,
        Date {
            day: 19,
            month: 11,
            year: 94,
        }
    );
    assert_eq!(
        rmc.magnetic_variation,
        Magnetic {
            value: 2030,
            direction: 'E',
        }
    );
    assert_eq!(rmc.faa_mode, 'A');
    assert_eq!(rmc.nav_status, 'S');
}

#[cfg(feature = "gps")]
#[test]
fn test_gsa_scenario() {
    use crate::NoValue;

    let decoded = process_line("$GNGSA,A,3,80,71,73,79,69,,,,,,,,1.83,1.09,1.47*17\r\n").unwrap();
    assert_eq!(decoded.talker_id, TalkerId::GN);

    let NmeaSentence::GSA(gsa) = decoded.sentence else {
        panic!("Unexpected sentence {:?}", decoded.sentence);
    };
    assert_eq!(
        gsa.satellite_ids,
        [80, 71, 73, 79, 69, 255, 255, 255, 255, 255, 255, 255]
    );
    assert_eq!(gsa.pdop, 183);
    assert_eq!(gsa.hdop, 109);
    assert_eq!(gsa.vdop, 147);
    assert!(gsa.system_id.is_no_value());
}

#[cfg(feature = "echo-sounder")]
#[test]
fn test_dpt_scenario() {
    let decoded = process_line("$SDDPT,4.1,*7C\r\n").unwrap();

    let NmeaSentence::DPT(dpt) = decoded.sentence else {
        panic!("Unexpected sentence {:?}", decoded.sentence);
    };
    assert_eq!(dpt.water_depth, 4100);
    assert_eq!(dpt.offset_from_transducer, 0);
    assert_eq!(dpt.max_range_scale, 0xFFFF_FFFF);
}

#[test]
fn test_unknown_sentence() {
    let result = process_line("$XXZZZ,data,00*4A\r\n");

    let Err(Error::UnknownElement(decoded)) = result else {
        panic!("Unexpected result {result:?}");
    };
    assert!(!decoded.valid);
    assert_eq!(decoded.talker_id, TalkerId(0x5858));
    assert_eq!(decoded.id(), SentenceId::Unknown);

    let NmeaSentence::Unknown(frame) = decoded.sentence else {
        panic!("Unexpected sentence {:?}", decoded.sentence);
    };
    assert_eq!(frame.as_slice(), b"$XXZZZ,data,00*4A");
}

#[cfg(not(feature = "gps"))]
#[test]
fn test_disabled_group() {
    let line = "$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E,A,S*7A\r\n";
    let result = process_line(line);

    let Err(Error::UnknownElement(decoded)) = result else {
        panic!("Unexpected result {result:?}");
    };
    assert!(!decoded.valid);
    assert_eq!(decoded.talker_id, TalkerId::GP);
    assert_eq!(decoded.id(), SentenceId::Unknown);

    let NmeaSentence::Unknown(frame) = decoded.sentence else {
        panic!("Unexpected sentence {:?}", decoded.sentence);
    };
    assert_eq!(frame.as_slice(), line.trim_end().as_bytes());
}

#[test]
fn test_longer_sentence_id() {
    let result = process_line("$GPRMCX,1*0E");
    assert!(
        matches!(&result, Err(Error::UnknownElement(decoded)) if decoded.talker_id == TalkerId::GP),
        "Failed: {result:?}"
    );
}

#[cfg(feature = "other")]
#[test]
fn test_txt_scenario() {
    let decoded = process_line("$GPTXT,01,01,25,DR MODE - ANTENNA FAULT^21*38\r\n").unwrap();

    let NmeaSentence::TXT(txt) = decoded.sentence else {
        panic!("Unexpected sentence {:?}", decoded.sentence);
    };
    assert_eq!(txt.identifier, 25);
    assert_eq!(txt.message.as_str(), Some("DR MODE - ANTENNA FAULT!"));
}

#[test]
fn test_line_errors() {
    let cases: [(&[u8], Error); 5] = [
        (b"GPHDM,235.6,M*2B\r\n", Error::BadFrameType),
        (b"", Error::BadFrameType),
        (
            b"$TestFrame*FF\r\n",
            Error::ChecksumError {
                calculated: 0x6B,
                found: Some(0xFF),
            },
        ),
        (
            b"$TestFrame\r\n",
            Error::ChecksumError {
                calculated: 0x6B,
                found: None,
            },
        ),
        (
            b"$TestFrame*6\r\n",
            Error::ChecksumError {
                calculated: 0x6B,
                found: None,
            },
        ),
    ];

    for (input, expected) in cases {
        let result = process_line(input);
        assert_eq!(result, Err(expected), "Failed: {input:?}");
    }
}

#[test]
fn test_malformed_header() {
    // Digits after the first two are not part of the checksum.
    let cases: [&str; 3] = ["$TestFrame*6B\r\n", "$TestFrame*6B0\r\n", "$TestFrame*6b \r\n"];

    for input in cases {
        let result = process_line(input);
        assert_eq!(
            result,
            Err(Error::ParseError(ErrorKind::Char)),
            "Failed: {input:?}"
        );
    }
}

#[cfg(all(feature = "echo-sounder", feature = "heading"))]
#[test]
fn test_grammar_mismatch() {
    let cases: [&str; 2] = ["$HCHDM,235.6,T*32\r\n", "$SDMTW,26.8,F*0D\r\n"];

    for input in cases {
        let result = process_line(input);
        assert!(
            matches!(result, Err(Error::ParseError(_))),
            "Failed: {input:?}\n\t{result:?}"
        );
    }

    assert_eq!(
        process_line("$HCHDM,235.6,T*32"),
        Err(Error::ParseError(ErrorKind::Char))
    );
}

#[cfg(feature = "echo-sounder")]
#[test]
fn test_line_terminators() {
    let cases: [&[u8]; 5] = [
        b"$SDMTW,26.8,C*08",
        b"$SDMTW,26.8,C*08 \r\n",
        b"$SDMTW,26.8,C*08\n",
        b"$SDMTW,26.8,C*08\0garbage",
        b"$SDMTW,26.8,C*08\r\n$SDMTW",
    ];

    for input in cases {
        let result = process_line(input);
        assert!(result.is_ok(), "Failed: {input:?}\n\t{result:?}");
    }
}

#[cfg(feature = "gps")]
#[test]
fn test_beyond_frame_buffer() {
    let line = "$GPRMC,225446.000,A,4916.4500000,N,12311.1200000,W,000.5,054.7,191194,020.3,E,A,S*64";
    assert_eq!(line.len(), 84);

    let decoded = process_line(line).unwrap();
    let NmeaSentence::RMC(rmc) = decoded.sentence else {
        panic!("Unexpected sentence {:?}", decoded.sentence);
    };
    assert_eq!(rmc.time.millisecond, 0);
    assert_eq!(rmc.latitude.minute, 164_500_000);
}
