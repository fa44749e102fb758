mod cgol;
