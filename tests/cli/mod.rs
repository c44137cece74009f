mod local_file;
