//! Canned outputs returned by the terminal simulator.

//--------------------------------------------------------------------------------------------------
// Constants: Placeholders
//--------------------------------------------------------------------------------------------------

/// Replaced with the short sandbox id when a response is rendered.
pub const SANDBOX_ID_PLACEHOLDER: &str = "{id}";

//--------------------------------------------------------------------------------------------------
// Constants: Security Tools
//--------------------------------------------------------------------------------------------------

pub(super) const NMAP: &str = "Starting Nmap scan...\n\
Hosts discovered: 192.168.1.1, 192.168.1.100\n\
Open ports: 22/tcp, 80/tcp, 443/tcp";

pub(super) const METASPLOIT: &str = "      =[ metasploit v6.2.23-dev                         ]\n\
+ -- --=[ 2230 exploits - 1177 auxiliary - 398 post       ]\n\
+ -- --=[ 867 payloads - 45 encoders - 11 nops            ]\n\
msf6 > ";

pub(super) const SQLMAP: &str = "sqlmap/1.6.12#stable\n\
[12:34:56] [INFO] testing connection to target URL\n\
[12:34:57] [INFO] target appears to be MySQL";

pub(super) const HASHCAT: &str = "hashcat (v6.2.5) starting...\n\
Device #1: NVIDIA GeForce GTX 1080, 8192 MB";

pub(super) const JOHN: &str = "John the Ripper 1.9.0-jumbo-1\n\
Loaded 1 password hash (md5crypt, crypt(3) $1$ [MD5 128/128 AVX 4x3])";

pub(super) const AIRCRACK: &str = "Aircrack-ng 1.6\n\
Reading packets, please wait...\n\
Opening wpa.cap\n\
Read 12345 packets.";

//--------------------------------------------------------------------------------------------------
// Constants: Shell Commands
//--------------------------------------------------------------------------------------------------

pub(super) const LS: &str =
    "bin  boot  dev  etc  home  lib  media  mnt  opt  proc  root  run  sbin  srv  sys  tmp  usr  var";

pub(super) const WHOAMI: &str = "root";

pub(super) const PWD: &str = "/root";

pub(super) const UNAME: &str =
    "Linux sandbox-{id} 5.15.0-kali3-amd64 #1 SMP Debian 5.15.15-2kali1 x86_64 GNU/Linux";

pub(super) const PS: &str =
    "USER       PID %CPU %MEM    VSZ   RSS TTY      STAT START   TIME COMMAND\n\
root         1  0.0  0.1  19312  1604 ?        Ss   12:00   0:00 /sbin/init";

pub(super) const IP: &str = "1: lo: <LOOPBACK,UP,LOWER_UP> mtu 65536 qdisc noqueue state UNKNOWN\n    \
inet 127.0.0.1/8 scope host lo";

pub(super) const DF: &str = "Filesystem      Size  Used Avail Use% Mounted on\n\
/dev/sda1        20G  2.1G   17G  12% /";

pub(super) const FREE: &str =
    "               total        used        free      shared  buff/cache   available\n\
Mem:           4.0Gi       234Mi       3.4Gi        12Mi       356Mi       3.5Gi";

pub(super) const NETSTAT: &str = "Active Internet connections (only servers)\n\
Proto Recv-Q Send-Q Local Address           Foreign Address         State";

pub(super) const HELP: &str = "Available commands: ls, pwd, whoami, uname, ps, ip, df, free, netstat, \
nmap, metasploit, sqlmap, hashcat, john, aircrack-ng";
