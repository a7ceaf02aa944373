use std::error::Error;

use loose_version::Version;

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::try_init()?;

    // parse a version string and show its parts
    let version = Version::parse("5.2.10");
    println!("major release: {}", version.major);
    println!("minor release: {}", version.minor);
    println!("patch: {}", version.patch);
    println!("{}", version); // 5.2.10
    println!("{}", version.short_string()); // 5.2

    // compare to a second version
    let other = Version::parse("5.2.1");
    if version.equal_or_higher_than(&other) {
        println!("you have the latest release");
    }

    // compare directly to another version string
    if version.higher_than_str("5.2") {
        println!("newer than 5.2");
    }

    // no errors are returned: unparseable input yields version 0.0.0
    let fallback = Version::parse("2.skfhaskjh.10");
    if fallback.to_string() == "0.0.0" {
        log::warn!("wrong version string");
    }

    // prefix and suffix text is kept around
    let tagged = Version::parse("iOS 14.2");
    println!("{} {}", tagged.prefix, tagged.short_string()); // iOS 14.2

    Ok(())
}
