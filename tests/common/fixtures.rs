//! Shared fixture content.
#![allow(dead_code)]

pub const MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest>
  <remote name="aosp" fetch=".." />
  <default revision="main" remote="aosp" />
  <project name="platform/vendor/x" path="vendor/x" />
  <project name="platform/vendor/hdr" path="vendor/hdr" />
  <project name="device/acme/phone" path="device/acme/phone" />
  <project name="platform/frameworks/base" path="frameworks/base" />
  <project name="platform/external/unused" path="external/unused" />
</manifest>
"#;

pub const REPO_LIST: &str = "\
vendor/x : platform/vendor/x
vendor/hdr : platform/vendor/hdr
device/acme/phone : device/acme/phone
frameworks/base : platform/frameworks/base
external/unused : platform/external/unused
";

pub const MODULE_INFO: &str = r#"{
  "foo": {"path": ["vendor/x"], "class": ["APPS"], "dependencies": ["libhdr"]},
  "libhdr": {"path": ["vendor/hdr"], "class": ["HEADER_LIBRARIES"], "dependencies": []},
  "framework": {"path": ["frameworks/base"], "class": ["JAVA_LIBRARIES"], "dependencies": []},
  "unused": {"path": ["external/unused"], "class": ["SHARED_LIBRARIES"], "dependencies": []}
}"#;

/// Fake `ninja -f <file> -t inputs -d <modules...>`.
pub const FAKE_NINJA: &str = r#"#!/bin/sh
while [ "$#" -gt 0 ]; do
  arg="$1"
  shift
  [ "$arg" = "-d" ] && break
done
for module in "$@"; do
  case "$module" in
    foo) echo vendor/x/Android.bp; echo out/tmp; echo vendor/x/MODULE_LICENSE_GPL ;;
    framework) echo frameworks/base/core/Foo.java ;;
  esac
done
"#;

/// Fake `ckati_stamp_dump --files <stamp>`.
pub const FAKE_STAMP_DUMP: &str = r#"#!/bin/sh
echo build/make/core/main.mk
echo device/acme/phone/device.mk
echo device/generic/goldfish/emulator.mk
echo device/acme/phone/Android.mk
echo out/soong/make_vars.mk
"#;

pub const FAILING_TOOL: &str = "#!/bin/sh\necho 'ninja: error: loading build.ninja' >&2\nexit 1\n";

/// Default location of the stamp dump tool, relative to the tree root.
pub const STAMP_DUMP_PATH: &str = "prebuilts/build-tools/linux-x86/bin/ckati_stamp_dump";
