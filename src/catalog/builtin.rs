/// Static catalog entry compiled into the crate.
pub(crate) struct BuiltinTable {
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    pub(crate) platforms: &'static [&'static str],
    pub(crate) evented: bool,
}

const ALL_PLATFORMS: &[&str] = &["darwin", "linux", "windows", "freebsd"];
const POSIX: &[&str] = &["darwin", "linux", "freebsd"];
const DESKTOP: &[&str] = &["darwin", "linux", "windows"];
const DARWIN_LINUX: &[&str] = &["darwin", "linux"];
const DARWIN_WINDOWS: &[&str] = &["darwin", "windows"];
const DARWIN: &[&str] = &["darwin"];
const LINUX: &[&str] = &["linux"];
const WINDOWS: &[&str] = &["windows"];

/// Osquery tables known to the bundled catalog, sorted by name.
pub(crate) const BUILTIN_TABLES: &[BuiltinTable] = &[
    BuiltinTable {
        name: "acpi_tables",
        description: "Firmware ACPI functional table common metadata and content.",
        platforms: DARWIN_LINUX,
        evented: false,
    },
    BuiltinTable {
        name: "alf",
        description: "OS X application layer firewall (ALF) service details.",
        platforms: DARWIN,
        evented: false,
    },
    BuiltinTable {
        name: "apps",
        description: "OS X applications installed in known search paths.",
        platforms: DARWIN,
        evented: false,
    },
    BuiltinTable {
        name: "apt_sources",
        description: "Current list of APT repositories or software channels.",
        platforms: LINUX,
        evented: false,
    },
    BuiltinTable {
        name: "arp_cache",
        description: "Address resolution cache, both static and dynamic (from ARP, NDP).",
        platforms: ALL_PLATFORMS,
        evented: false,
    },
    BuiltinTable {
        name: "authorized_keys",
        description: "A line-delimited authorized_keys table.",
        platforms: POSIX,
        evented: false,
    },
    BuiltinTable {
        name: "bitlocker_info",
        description: "Retrieve bitlocker status of the machine.",
        platforms: WINDOWS,
        evented: false,
    },
    BuiltinTable {
        name: "block_devices",
        description: "Block (buffered access) device file nodes: disks, ramdisks, and DMG containers.",
        platforms: DARWIN_LINUX,
        evented: false,
    },
    BuiltinTable {
        name: "certificates",
        description: "Certificate Authorities installed in Keychains/ca-bundles.",
        platforms: DARWIN_WINDOWS,
        evented: false,
    },
    BuiltinTable {
        name: "chocolatey_packages",
        description: "Chocolatey packages installed in a system.",
        platforms: WINDOWS,
        evented: false,
    },
    BuiltinTable {
        name: "chrome_extensions",
        description: "Chrome-based browser extensions.",
        platforms: DESKTOP,
        evented: false,
    },
    BuiltinTable {
        name: "cpu_info",
        description: "Retrieve cpu hardware info of the machine.",
        platforms: DESKTOP,
        evented: false,
    },
    BuiltinTable {
        name: "crontab",
        description: "Line parsed values from system and user cron/tab.",
        platforms: POSIX,
        evented: false,
    },
    BuiltinTable {
        name: "deb_packages",
        description: "The installed DEB package database.",
        platforms: LINUX,
        evented: false,
    },
    BuiltinTable {
        name: "disk_encryption",
        description: "Disk encryption status and information.",
        platforms: DARWIN_LINUX,
        evented: false,
    },
    BuiltinTable {
        name: "disk_info",
        description: "Retrieve basic information about the physical disks of a system.",
        platforms: WINDOWS,
        evented: false,
    },
    BuiltinTable {
        name: "dns_resolvers",
        description: "Resolvers used by this host.",
        platforms: POSIX,
        evented: false,
    },
    BuiltinTable {
        name: "docker_containers",
        description: "Docker containers information.",
        platforms: DARWIN_LINUX,
        evented: false,
    },
    BuiltinTable {
        name: "etc_hosts",
        description: "Line-parsed /etc/hosts.",
        platforms: ALL_PLATFORMS,
        evented: false,
    },
    BuiltinTable {
        name: "file",
        description: "Interactive filesystem attributes and metadata.",
        platforms: ALL_PLATFORMS,
        evented: false,
    },
    BuiltinTable {
        name: "file_events",
        description: "Track time/action changes to files specified in configuration data.",
        platforms: DARWIN_LINUX,
        evented: true,
    },
    BuiltinTable {
        name: "firefox_addons",
        description: "Firefox browser extensions, webapps, and addons.",
        platforms: DESKTOP,
        evented: false,
    },
    BuiltinTable {
        name: "gatekeeper",
        description: "OS X Gatekeeper Details.",
        platforms: DARWIN,
        evented: false,
    },
    BuiltinTable {
        name: "groups",
        description: "Local system groups.",
        platforms: ALL_PLATFORMS,
        evented: false,
    },
    BuiltinTable {
        name: "hash",
        description: "Filesystem hash data.",
        platforms: ALL_PLATFORMS,
        evented: false,
    },
    BuiltinTable {
        name: "homebrew_packages",
        description: "The installed homebrew package database.",
        platforms: DARWIN,
        evented: false,
    },
    BuiltinTable {
        name: "interface_addresses",
        description: "Network interfaces and relevant metadata.",
        platforms: ALL_PLATFORMS,
        evented: false,
    },
    BuiltinTable {
        name: "interface_details",
        description: "Detailed information and stats of network interfaces.",
        platforms: ALL_PLATFORMS,
        evented: false,
    },
    BuiltinTable {
        name: "iptables",
        description: "Linux IP packet filtering and NAT tool.",
        platforms: LINUX,
        evented: false,
    },
    BuiltinTable {
        name: "kernel_info",
        description: "Basic active kernel information.",
        platforms: ALL_PLATFORMS,
        evented: false,
    },
    BuiltinTable {
        name: "kernel_modules",
        description: "Linux kernel modules both loaded and within the load search path.",
        platforms: LINUX,
        evented: false,
    },
    BuiltinTable {
        name: "keychain_items",
        description: "Generic details about keychain items.",
        platforms: DARWIN,
        evented: false,
    },
    BuiltinTable {
        name: "launchd",
        description: "LaunchAgents and LaunchDaemons from default search paths.",
        platforms: DARWIN,
        evented: false,
    },
    BuiltinTable {
        name: "listening_ports",
        description: "Processes with listening (bound) network sockets/ports.",
        platforms: ALL_PLATFORMS,
        evented: false,
    },
    BuiltinTable {
        name: "logged_in_users",
        description: "Users with an active shell on the system.",
        platforms: ALL_PLATFORMS,
        evented: false,
    },
    BuiltinTable {
        name: "memory_info",
        description: "Main memory information in bytes.",
        platforms: LINUX,
        evented: false,
    },
    BuiltinTable {
        name: "mounts",
        description: "System mounted devices and filesystems (not process specific).",
        platforms: POSIX,
        evented: false,
    },
    BuiltinTable {
        name: "npm_packages",
        description: "Lists all npm packages in a directory or globally installed in a system.",
        platforms: DESKTOP,
        evented: false,
    },
    BuiltinTable {
        name: "ntfs_acl_permissions",
        description: "Retrieve NTFS ACL permission information for files and directories.",
        platforms: WINDOWS,
        evented: false,
    },
    BuiltinTable {
        name: "os_version",
        description: "A single row containing the operating system name and version.",
        platforms: ALL_PLATFORMS,
        evented: false,
    },
    BuiltinTable {
        name: "osquery_info",
        description: "Top level information about the running version of osquery.",
        platforms: ALL_PLATFORMS,
        evented: false,
    },
    BuiltinTable {
        name: "patches",
        description: "Lists all the patches applied.",
        platforms: WINDOWS,
        evented: false,
    },
    BuiltinTable {
        name: "process_events",
        description: "Track time/action process executions.",
        platforms: POSIX,
        evented: true,
    },
    BuiltinTable {
        name: "process_open_sockets",
        description: "Processes which have open network sockets on the system.",
        platforms: ALL_PLATFORMS,
        evented: false,
    },
    BuiltinTable {
        name: "processes",
        description: "All running processes on the host system.",
        platforms: ALL_PLATFORMS,
        evented: false,
    },
    BuiltinTable {
        name: "programs",
        description: "Represents products as they are installed by Windows Installer.",
        platforms: WINDOWS,
        evented: false,
    },
    BuiltinTable {
        name: "python_packages",
        description: "Python packages installed in a system.",
        platforms: DESKTOP,
        evented: false,
    },
    BuiltinTable {
        name: "registry",
        description: "All of the Windows registry hives.",
        platforms: WINDOWS,
        evented: false,
    },
    BuiltinTable {
        name: "routes",
        description: "The active route table for the host system.",
        platforms: ALL_PLATFORMS,
        evented: false,
    },
    BuiltinTable {
        name: "rpm_packages",
        description: "RPM packages that are currently installed on the host system.",
        platforms: LINUX,
        evented: false,
    },
    BuiltinTable {
        name: "scheduled_tasks",
        description: "Lists all of the tasks in the Windows task scheduler.",
        platforms: WINDOWS,
        evented: false,
    },
    BuiltinTable {
        name: "selinux_settings",
        description: "Track active SELinux settings.",
        platforms: LINUX,
        evented: false,
    },
    BuiltinTable {
        name: "services",
        description: "Lists all installed Windows services and their relevant data.",
        platforms: WINDOWS,
        evented: false,
    },
    BuiltinTable {
        name: "shadow",
        description: "Local system users encrypted passwords and related information.",
        platforms: LINUX,
        evented: false,
    },
    BuiltinTable {
        name: "sip_config",
        description: "Apple's System Integrity Protection (rootless) status.",
        platforms: DARWIN,
        evented: false,
    },
    BuiltinTable {
        name: "ssh_configs",
        description: "A table of parsed ssh_configs.",
        platforms: DESKTOP,
        evented: false,
    },
    BuiltinTable {
        name: "startup_items",
        description: "Applications and binaries set as user/login startup items.",
        platforms: DESKTOP,
        evented: false,
    },
    BuiltinTable {
        name: "system_info",
        description: "System information for identification.",
        platforms: ALL_PLATFORMS,
        evented: false,
    },
    BuiltinTable {
        name: "systemd_units",
        description: "Track systemd units.",
        platforms: LINUX,
        evented: false,
    },
    BuiltinTable {
        name: "time",
        description: "Track current date and time in the system.",
        platforms: ALL_PLATFORMS,
        evented: false,
    },
    BuiltinTable {
        name: "uptime",
        description: "Track time passed since last boot.",
        platforms: ALL_PLATFORMS,
        evented: false,
    },
    BuiltinTable {
        name: "usb_devices",
        description: "USB devices that are actively plugged into the host system.",
        platforms: POSIX,
        evented: false,
    },
    BuiltinTable {
        name: "user_ssh_keys",
        description: "Returns the private keys in the users ~/.ssh directory and whether or not they are encrypted.",
        platforms: ALL_PLATFORMS,
        evented: false,
    },
    BuiltinTable {
        name: "users",
        description: "Local user accounts (including domain accounts that have logged on locally (Windows)).",
        platforms: ALL_PLATFORMS,
        evented: false,
    },
    BuiltinTable {
        name: "windows_crashes",
        description: "Extracted information from Windows crash logs (Minidumps).",
        platforms: WINDOWS,
        evented: false,
    },
    BuiltinTable {
        name: "windows_security_center",
        description: "The health status of Window Security features.",
        platforms: WINDOWS,
        evented: false,
    },
    BuiltinTable {
        name: "wmi_cli_event_consumers",
        description: "WMI CommandLineEventConsumer, which can be used for persistence on Windows.",
        platforms: WINDOWS,
        evented: false,
    },
    BuiltinTable {
        name: "yum_sources",
        description: "Current list of Yum repositories or software channels.",
        platforms: LINUX,
        evented: false,
    },
];
