use qbuild_lib::platform::Family;
use qbuild_lib::platform::os::Os;
use qbuild_lib::settings::Settings;

use crate::output::print_stat;

pub fn cmd_info() {
  println!("System:");
  match Os::current() {
    Some(os) => print_stat("OS", os.as_str()),
    _ => print_stat("OS", "unknown"),
  }
  let family = Family::current();
  print_stat("Family", family.as_str());
  print_stat("Make tool", family.make_tool());
  match Settings::default_path() {
    Ok(path) => print_stat("Settings", &path.display().to_string()),
    Err(e) => print_stat("Settings", &e.to_string()),
  }
}
